//! Display functions for CLI results

use crate::graph::WordGraph;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Print a summary of a finished build
pub fn print_build_summary(graph: &WordGraph, elapsed: Duration, output: &Path) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Word graph complete".green().bold());
    println!(
        "  Words:   {}",
        graph.len().to_string().bright_yellow().bold()
    );
    println!(
        "  Links:   {}",
        graph.edge_count().to_string().bright_yellow()
    );
    println!("  Elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Output:  {}", output.display());
    println!("{}", "─".repeat(60).cyan());
}
