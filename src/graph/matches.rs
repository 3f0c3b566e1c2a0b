//! Candidate lookup and threshold filtering
//!
//! One neighbor query: walk the query word's positions, tally every word
//! sharing a letter bucket, keep those meeting the threshold.

use super::index::{PositionalIndex, WordId};
use super::tally::MatchTally;
use crate::core::Word;

/// Find all neighbors of the word at `query` in the table
///
/// Scans positions left to right; each bucket member other than the query
/// itself gets one tally point per shared position. Candidates whose final
/// count reaches `threshold` are returned in the order they were first
/// encountered.
///
/// A threshold of 1 or below keeps every candidate sharing at least one
/// position (counts never start below 1); a threshold above the word length
/// can never be met and yields an empty list. The tally is cleared on entry,
/// so a caller may reuse one across queries.
#[must_use]
pub fn find_matches(
    query: WordId,
    threshold: i32,
    index: &PositionalIndex,
    words: &[Word],
    tally: &mut MatchTally,
) -> Vec<WordId> {
    tally.reset();

    let word = &words[query as usize];
    // Counts start at 1, so every threshold at or below 1 filters identically.
    let min_count = threshold.max(1) as u32;

    for (position, &letter) in word.letters().iter().enumerate() {
        for &candidate in index.bucket(position, letter) {
            if candidate == query {
                continue;
            }
            tally.increment(candidate);
        }
    }

    tally
        .iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(texts: &[&str]) -> (Vec<Word>, PositionalIndex) {
        let words: Vec<Word> = texts.iter().map(|&t| Word::new(t)).collect();
        let index = PositionalIndex::build(&words).unwrap();
        (words, index)
    }

    fn matches(words: &[Word], index: &PositionalIndex, query: WordId, threshold: i32) -> Vec<String> {
        let mut tally = MatchTally::new(words.len());
        find_matches(query, threshold, index, words, &mut tally)
            .into_iter()
            .map(|id| words[id as usize].text().to_string())
            .collect()
    }

    #[test]
    fn neighbors_in_first_encounter_order() {
        let (words, index) = setup(&["cat", "cot", "cap", "dog"]);

        // Position 0 ('c') surfaces cot then cap; both reach two matches.
        assert_eq!(matches(&words, &index, 0, 2), vec!["cot", "cap"]);
        assert_eq!(matches(&words, &index, 3, 2), Vec::<String>::new());
    }

    #[test]
    fn query_word_never_matches_itself() {
        let (words, index) = setup(&["aaa", "aab"]);

        for threshold in [1, 2, 3] {
            for query in 0..words.len() as WordId {
                let found = matches(&words, &index, query, threshold);
                assert!(!found.contains(&words[query as usize].text().to_string()));
            }
        }
    }

    #[test]
    fn raising_threshold_never_adds_neighbors() {
        let (words, index) = setup(&["aaa", "aab", "aba", "baa", "abb"]);

        for query in 0..words.len() as WordId {
            let mut previous = matches(&words, &index, query, 0);
            for threshold in 1..=4 {
                let current = matches(&words, &index, query, threshold);
                assert!(current.iter().all(|w| previous.contains(w)));
                assert!(current.len() <= previous.len());
                previous = current;
            }
        }
    }

    #[test]
    fn zero_and_negative_thresholds_behave_like_one() {
        let (words, index) = setup(&["cat", "cot", "dog"]);

        let at_one = matches(&words, &index, 0, 1);
        assert_eq!(matches(&words, &index, 0, 0), at_one);
        assert_eq!(matches(&words, &index, 0, -5), at_one);
        // "dog" shares no position with "cat", so it never tallies at all.
        assert_eq!(at_one, vec!["cot"]);
    }

    #[test]
    fn threshold_above_word_length_yields_nothing() {
        let (words, index) = setup(&["cat", "cot", "cap"]);
        assert_eq!(matches(&words, &index, 0, 4), Vec::<String>::new());
    }

    #[test]
    fn reused_tally_carries_nothing_between_queries() {
        let (words, index) = setup(&["aaa", "aab", "bbb"]);
        let mut tally = MatchTally::new(words.len());

        let first = find_matches(0, 2, &index, &words, &mut tally);
        let second = find_matches(2, 2, &index, &words, &mut tally);

        assert_eq!(first, vec![1]);
        assert_eq!(second, Vec::<WordId>::new());
    }
}
