//! Word Graph - CLI
//!
//! Reads a word list, builds the adjacency graph, and writes it as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use word_graph::{
    graph::{DEFAULT_PROGRESS_INTERVAL, build_graph_with_progress},
    output::{print_build_summary, write_graph},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_graph",
    about = "Build a word adjacency graph from a list of equal-length words",
    version,
    author
)]
struct Cli {
    /// Minimum number of matching letter positions for two words to be linked
    #[arg(long = "num-matches")]
    num_matches: i32,

    /// Path to the word list, one word per line
    #[arg(long)]
    input: PathBuf,

    /// Path to write the JSON graph
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_from_file(&cli.input)
        .with_context(|| format!("failed to read word list {}", cli.input.display()))?;

    let start = Instant::now();

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let graph = build_graph_with_progress(
        &words,
        cli.num_matches,
        DEFAULT_PROGRESS_INTERVAL,
        |processed| pb.set_position(processed as u64),
    )?;
    pb.finish_and_clear();

    write_graph(&cli.output, &graph)
        .with_context(|| format!("failed to write graph to {}", cli.output.display()))?;

    print_build_summary(&graph, start.elapsed(), &cli.output);
    Ok(())
}
