//! Positional letter index
//!
//! For each letter position and each letter of the alphabet, the set of words
//! carrying that letter at that position. Built once over the full word list,
//! immutable afterwards; every neighbor query reads from it.

use crate::core::Word;
use std::fmt;

/// Identifier of a word: its index in the deduplicated word table.
pub type WordId = u32;

/// Number of letters in the indexed alphabet (`a-z`).
pub const ALPHABET_LEN: usize = 26;

/// Map an `a-z` byte to its bucket offset
///
/// Bytes outside the lowercase alphabet have no bucket: they are never
/// indexed and never looked up, so a word containing one simply cannot
/// match on that position.
#[inline]
pub(crate) fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Error type for graph construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A word's length differs from the first word's length
    InconsistentLength { expected: usize, found: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentLength { expected, found } => {
                write!(f, "inconsistent word length: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Per-position letter buckets over word ids
///
/// Slot `i` holds a fixed array of 26 buckets, one per letter; bucket
/// `letter - b'a'` lists the ids of all words whose letter at position `i`
/// is `letter`. Every bucket exists even when empty, so lookups never
/// allocate or hash. Bucket contents keep word-table order, which makes
/// downstream neighbor order deterministic.
#[derive(Debug)]
pub struct PositionalIndex {
    word_len: usize,
    slots: Vec<[Vec<WordId>; ALPHABET_LEN]>,
}

impl PositionalIndex {
    /// Build the index over a word table
    ///
    /// The table is expected to be deduplicated; each id then appears at most
    /// once per bucket, mirroring the set semantics of the letter buckets.
    ///
    /// # Errors
    /// Returns [`GraphError::InconsistentLength`] if any word's length differs
    /// from the first word's length. This is the only failure mode.
    pub fn build(words: &[Word]) -> Result<Self, GraphError> {
        let word_len = words.first().map_or(0, Word::len);

        let mut slots: Vec<[Vec<WordId>; ALPHABET_LEN]> = (0..word_len)
            .map(|_| std::array::from_fn(|_| Vec::new()))
            .collect();

        for (id, word) in words.iter().enumerate() {
            if word.len() != word_len {
                return Err(GraphError::InconsistentLength {
                    expected: word_len,
                    found: word.len(),
                });
            }

            for (position, &letter) in word.letters().iter().enumerate() {
                if let Some(offset) = letter_index(letter) {
                    slots[position][offset].push(id as WordId);
                }
            }
        }

        Ok(Self { word_len, slots })
    }

    /// Length shared by all indexed words
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// The ids of all words holding `letter` at `position`
    ///
    /// Returns an empty slice for letters outside `a-z`.
    ///
    /// # Panics
    /// Panics if `position >= self.word_len()`
    #[inline]
    #[must_use]
    pub fn bucket(&self, position: usize, letter: u8) -> &[WordId] {
        letter_index(letter).map_or(&[], |offset| self.slots[position][offset].as_slice())
    }
}
