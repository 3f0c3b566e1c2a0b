//! JSON output
//!
//! Serializes the finished graph as a JSON object, word → neighbor array,
//! in graph order.

use crate::graph::WordGraph;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Write the graph as JSON to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_graph<P: AsRef<Path>>(path: P, graph: &WordGraph) -> io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, graph)?;
    Ok(())
}
