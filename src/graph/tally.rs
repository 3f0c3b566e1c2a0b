//! Per-query match tally
//!
//! Counts, for one query word, how many positions each candidate shares with
//! it. A dense counts table gives O(1) increments; a separate first-touch list
//! preserves the order candidates were first encountered, which is the order
//! neighbors appear in the finished graph.

use super::index::WordId;

/// Accumulator mapping candidate id to its running match count
///
/// Scratch state for a single query. `reset` restores it to empty without
/// releasing capacity, so a builder loop (or one rayon worker) can reuse a
/// single tally across queries; nothing observable crosses from one query to
/// the next.
#[derive(Debug)]
pub struct MatchTally {
    counts: Vec<u32>,
    touched: Vec<WordId>,
}

impl MatchTally {
    /// Create a tally sized for a word table of `word_count` entries
    #[must_use]
    pub fn new(word_count: usize) -> Self {
        Self {
            counts: vec![0; word_count],
            touched: Vec::new(),
        }
    }

    /// Record one matching position for `candidate`
    ///
    /// # Panics
    /// Panics if `candidate` is outside the word table the tally was sized for.
    #[inline]
    pub fn increment(&mut self, candidate: WordId) {
        let slot = &mut self.counts[candidate as usize];
        if *slot == 0 {
            self.touched.push(candidate);
        }
        *slot += 1;
    }

    /// Candidates in first-touch order with their final counts
    pub fn iter(&self) -> impl Iterator<Item = (WordId, u32)> + '_ {
        self.touched
            .iter()
            .map(|&id| (id, self.counts[id as usize]))
    }

    /// Number of distinct candidates touched
    #[must_use]
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    /// Whether no candidate has been touched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Clear all counts, keeping allocations for the next query
    pub fn reset(&mut self) {
        for &id in &self.touched {
            self.counts[id as usize] = 0;
        }
        self.touched.clear();
    }
}
