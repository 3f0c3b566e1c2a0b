//! Word list loading utilities
//!
//! Reads one word per line; lines are trimmed of surrounding whitespace and
//! blank lines are skipped. No per-word validation happens here; length
//! consistency is the graph builder's concern.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line, preserving file order
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_graph::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse words out of newline-separated text
///
/// # Examples
/// ```
/// use word_graph::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("cat\ncot\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Word::new(trimmed))
            }
        })
        .collect()
}
