//! Word Graph
//!
//! Builds an adjacency structure over a list of equal-length words: two words
//! are linked when they agree on at least a configured number of letter
//! positions. Useful for word-ladder and anagram-adjacent puzzle generation.
//!
//! # Quick Start
//!
//! ```rust
//! use word_graph::core::Word;
//! use word_graph::graph::build_graph;
//!
//! let words = vec![Word::new("cat"), Word::new("cot"), Word::new("dog")];
//! let graph = build_graph(&words, 2).unwrap();
//!
//! let neighbors = graph.neighbors_of("cat").unwrap();
//! assert_eq!(neighbors[0].text(), "cot");
//! assert!(graph.neighbors_of("dog").unwrap().is_empty());
//! ```

// Core domain types
pub mod core;

// Graph construction
pub mod graph;

// Word list input
pub mod wordlists;

// Output serialization and display
pub mod output;
