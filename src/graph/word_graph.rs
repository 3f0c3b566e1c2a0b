//! The finished word graph
//!
//! Adjacency is stored as ids into the deduplicated word table rather than
//! cloned strings; neighbor lists resolve back through the table on access
//! and on serialization.

use super::index::WordId;
use crate::core::Word;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping from each word to its ordered list of qualifying neighbors
///
/// Entry order is input (first-occurrence) order; neighbor order is the order
/// candidates were first encountered during that word's query. Serializes as
/// a JSON object of word → neighbor array, preserving both orders.
#[derive(Debug, Default)]
pub struct WordGraph {
    words: Vec<Word>,
    adjacency: Vec<Vec<WordId>>,
    by_text: FxHashMap<String, usize>,
}

impl WordGraph {
    pub(crate) fn from_parts(words: Vec<Word>, adjacency: Vec<Vec<WordId>>) -> Self {
        debug_assert_eq!(words.len(), adjacency.len());
        let by_text = words
            .iter()
            .enumerate()
            .map(|(entry, word)| (word.text().to_string(), entry))
            .collect();
        Self {
            words,
            adjacency,
            by_text,
        }
    }

    /// Number of words (graph nodes)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The graph's words in entry order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Total number of directed neighbor links
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// The neighbor list recorded for `word`, or `None` if it is not a node
    #[must_use]
    pub fn neighbors_of(&self, word: &str) -> Option<Vec<&Word>> {
        let entry = *self.by_text.get(word)?;
        Some(
            self.adjacency[entry]
                .iter()
                .map(|&id| &self.words[id as usize])
                .collect(),
        )
    }

    /// Iterate entries in order as (word, neighbor list) pairs
    pub fn entries(&self) -> impl Iterator<Item = (&Word, Vec<&Word>)> + '_ {
        self.words.iter().zip(&self.adjacency).map(|(word, ids)| {
            let neighbors = ids.iter().map(|&id| &self.words[id as usize]).collect();
            (word, neighbors)
        })
    }
}

impl Serialize for WordGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.words.len()))?;
        for (word, neighbors) in self.entries() {
            map.serialize_entry(word, &neighbors)?;
        }
        map.end()
    }
}
