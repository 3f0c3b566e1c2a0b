//! Graph construction orchestration
//!
//! Dedupes the input, builds the positional index, then runs one neighbor
//! query per word. The core stays single-threaded and console-free; progress
//! goes through a caller-supplied observer, and a rayon variant fans the
//! per-word queries out over the immutable index.

use super::index::{GraphError, PositionalIndex, WordId};
use super::matches::find_matches;
use super::tally::MatchTally;
use super::word_graph::WordGraph;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Progress cadence used by the CLI: one notification per thousand words.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Build the word graph over `words` with the given match threshold
///
/// Duplicate input words collapse to a single node, in first-occurrence
/// order. An empty input yields an empty graph without building an index.
///
/// # Errors
/// Returns [`GraphError::InconsistentLength`] if the words do not all share
/// one length; no partial graph is produced.
pub fn build_graph(words: &[Word], threshold: i32) -> Result<WordGraph, GraphError> {
    build_graph_with_progress(words, threshold, 0, |_| {})
}

/// Build the word graph, notifying `on_progress` every `every` processed words
///
/// The observer receives the number of words processed so far (0, `every`,
/// 2×`every`, ...). It exists for operational visibility only and has no
/// effect on the result; `every == 0` disables it.
///
/// # Errors
/// Returns [`GraphError::InconsistentLength`] if the words do not all share
/// one length.
pub fn build_graph_with_progress<F>(
    words: &[Word],
    threshold: i32,
    every: usize,
    mut on_progress: F,
) -> Result<WordGraph, GraphError>
where
    F: FnMut(usize),
{
    if words.is_empty() {
        return Ok(WordGraph::default());
    }

    let table = dedup_preserving_order(words);
    let index = PositionalIndex::build(&table)?;

    let mut tally = MatchTally::new(table.len());
    let mut adjacency = Vec::with_capacity(table.len());
    for query in 0..table.len() {
        if every > 0 && query % every == 0 {
            on_progress(query);
        }
        adjacency.push(find_matches(
            query as WordId,
            threshold,
            &index,
            &table,
            &mut tally,
        ));
    }

    Ok(WordGraph::from_parts(table, adjacency))
}

/// Build the word graph with per-word queries fanned out across threads
///
/// Each query only reads the shared index and writes its own output slot, so
/// the result is identical to [`build_graph`]. Worth it for large word lists.
///
/// # Errors
/// Returns [`GraphError::InconsistentLength`] if the words do not all share
/// one length.
pub fn build_graph_parallel(words: &[Word], threshold: i32) -> Result<WordGraph, GraphError> {
    if words.is_empty() {
        return Ok(WordGraph::default());
    }

    let table = dedup_preserving_order(words);
    let index = PositionalIndex::build(&table)?;

    let adjacency: Vec<Vec<WordId>> = (0..table.len() as WordId)
        .into_par_iter()
        .map_init(
            || MatchTally::new(table.len()),
            |tally, query| find_matches(query, threshold, &index, &table, tally),
        )
        .collect();

    Ok(WordGraph::from_parts(table, adjacency))
}

/// Drop repeated words, keeping first occurrences in input order
fn dedup_preserving_order(words: &[Word]) -> Vec<Word> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    words
        .iter()
        .filter(|word| seen.insert(word.text()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    fn neighbor_texts(graph: &WordGraph, word: &str) -> Vec<String> {
        graph
            .neighbors_of(word)
            .unwrap()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn three_letter_scenario() {
        let graph = build_graph(&words(&["cat", "cot", "cap", "dog"]), 2).unwrap();

        assert_eq!(neighbor_texts(&graph, "cat"), vec!["cot", "cap"]);
        assert_eq!(neighbor_texts(&graph, "cot"), vec!["cat"]);
        assert_eq!(neighbor_texts(&graph, "cap"), vec!["cat"]);
        assert_eq!(neighbor_texts(&graph, "dog"), Vec::<String>::new());
    }

    #[test]
    fn two_of_three_positions_shared() {
        let graph = build_graph(&words(&["aaa", "aab", "aba", "baa"]), 2).unwrap();
        assert_eq!(neighbor_texts(&graph, "aaa"), vec!["aab", "aba", "baa"]);
    }

    #[test]
    fn disjoint_words_have_no_neighbors() {
        let graph = build_graph(&words(&["abc", "xyz"]), 1).unwrap();
        assert_eq!(neighbor_texts(&graph, "abc"), Vec::<String>::new());
        assert_eq!(neighbor_texts(&graph, "xyz"), Vec::<String>::new());
    }

    #[test]
    fn duplicate_input_collapses_and_never_self_links() {
        let graph = build_graph(&words(&["same", "same"]), 1).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(neighbor_texts(&graph, "same"), Vec::<String>::new());
    }

    #[test]
    fn no_word_is_its_own_neighbor() {
        let graph = build_graph(&words(&["aaa", "aab", "aba", "baa"]), 1).unwrap();

        for word in graph.words() {
            let neighbors = graph.neighbors_of(word.text()).unwrap();
            assert!(neighbors.iter().all(|n| *n != word));
        }
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let graph = build_graph(&[], 2).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn mixed_lengths_fail_fast() {
        let err = build_graph(&words(&["cat", "boat"]), 1).unwrap_err();
        assert_eq!(
            err,
            GraphError::InconsistentLength {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn entry_order_follows_input_order() {
        let graph = build_graph(&words(&["dog", "cat", "cot"]), 2).unwrap();

        let order: Vec<&str> = graph.words().iter().map(Word::text).collect();
        assert_eq!(order, vec!["dog", "cat", "cot"]);
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let input = words(&["cat", "cot", "cap", "cop", "map", "mop", "dog", "dot"]);

        for threshold in 0..=4 {
            let sequential = build_graph(&input, threshold).unwrap();
            let parallel = build_graph_parallel(&input, threshold).unwrap();

            assert_eq!(
                serde_json::to_string(&sequential).unwrap(),
                serde_json::to_string(&parallel).unwrap()
            );
        }
    }

    #[test]
    fn progress_observer_fires_on_the_interval() {
        let input = words(&["aaa", "aab", "aba", "baa", "abb"]);
        let mut reported = Vec::new();

        build_graph_with_progress(&input, 2, 2, |processed| reported.push(processed)).unwrap();
        assert_eq!(reported, vec![0, 2, 4]);
    }

    #[test]
    fn progress_observer_silent_when_disabled() {
        let input = words(&["aaa", "aab"]);
        let mut fired = false;

        build_graph_with_progress(&input, 2, 0, |_| fired = true).unwrap();
        assert!(!fired);
    }

    #[test]
    fn raising_threshold_shrinks_every_neighbor_list() {
        let input = words(&["cat", "cot", "cap", "cop", "tap"]);

        let loose = build_graph(&input, 1).unwrap();
        let strict = build_graph(&input, 2).unwrap();

        for word in loose.words() {
            let loose_set = neighbor_texts(&loose, word.text());
            let strict_set = neighbor_texts(&strict, word.text());
            assert!(strict_set.iter().all(|n| loose_set.contains(n)));
        }
    }
}
