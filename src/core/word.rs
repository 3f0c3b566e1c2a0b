//! Word representation
//!
//! A Word is a graph node: an owned lowercase string with positional letter access.

use serde::Serialize;
use std::fmt;

/// A word treated as an atomic graph node
///
/// Words are not validated individually. The one structural requirement, that
/// every word in a run has the same length, is checked when the positional
/// index is built. Bytes outside `a-z` are tolerated and simply never matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use word_graph::core::Word;
    ///
    /// let word = Word::new("cat");
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Count the positions at which `self` and `other` hold the same letter
    ///
    /// Symmetric: `a.matching_positions(&b) == b.matching_positions(&a)`.
    /// Positions past the shorter word never match.
    ///
    /// # Examples
    /// ```
    /// use word_graph::core::Word;
    ///
    /// let cat = Word::new("cat");
    /// let cot = Word::new("cot");
    /// assert_eq!(cat.matching_positions(&cot), 2);
    /// ```
    #[must_use]
    pub fn matching_positions(&self, other: &Self) -> usize {
        self.letters()
            .iter()
            .zip(other.letters())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
