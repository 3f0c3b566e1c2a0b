//! Word graph construction
//!
//! The core algorithm: a positional letter index over the word list, a
//! per-query match tally, and the orchestration that turns them into the
//! finished adjacency mapping.

mod builder;
mod index;
mod matches;
mod tally;
mod word_graph;

pub use builder::{
    DEFAULT_PROGRESS_INTERVAL, build_graph, build_graph_parallel, build_graph_with_progress,
};
pub use index::{ALPHABET_LEN, GraphError, PositionalIndex, WordId};
pub use matches::find_matches;
pub use tally::MatchTally;
pub use word_graph::WordGraph;
