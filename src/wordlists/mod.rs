//! Word list input
//!
//! File loading for the graph builder; the core never reads files itself.

pub mod loader;

pub use loader::{load_from_file, words_from_lines};
