//! Greedy construction of the ideal ranking used to normalize alpha-DCG.
//!
//! Finding the ranking that maximizes alpha-DCG is NP-hard (it contains
//! maximum coverage). The standard reference ordering is greedy: at each
//! position pick the candidate with the largest marginal gain given what has
//! already been placed. Alpha-DCG is submodular in the selected set, so this
//! is the usual approximation, not the true optimum over all permutations.
//!
//! Ties go to the lowest document id, so the result is deterministic.

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::validate_alpha;
use crate::error::Result;
use crate::gain::OccurrenceCounter;
use crate::topics::TopicIndex;

/// Greedy ideal ranking for `query` over `candidates`, at most `depth` long.
///
/// Duplicate candidates collapse. The result has
/// `min(depth, distinct candidates)` entries; candidates that hit no query
/// topic are still placed (in id order) once nothing better remains.
/// Alpha outside `[0, 1]` is `InvalidConfiguration`.
pub fn ideal_ranking<S: AsRef<str>>(
    index: &TopicIndex,
    alpha: f64,
    query: &str,
    candidates: &[S],
    depth: usize,
) -> Result<Vec<String>> {
    validate_alpha(alpha)?;
    let query_topics = index.query_topics(query)?;

    // A candidate's hits do not change between rounds; only the counts do.
    let mut pool: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for doc in candidates {
        let doc = doc.as_ref();
        if !pool.contains_key(doc) {
            pool.insert(doc, index.hits(doc, query_topics)?.collect());
        }
    }

    let mut counter = OccurrenceCounter::new(query_topics);
    let mut ideal = Vec::with_capacity(depth.min(pool.len()));
    while ideal.len() < depth {
        let position = ideal.len();
        let mut best: Option<(&str, f64)> = None;
        for (&doc, hits) in &pool {
            let gain = counter.marginal_gain(alpha, hits.iter().copied(), position);
            // Strict: an equal gain later in id order never displaces the first.
            if best.map_or(true, |(_, top)| gain > top) {
                best = Some((doc, gain));
            }
        }
        let Some((doc, gain)) = best else {
            break;
        };
        trace!(query, position, doc, gain, "ideal ranking pick");

        if let Some(hits) = pool.remove(doc) {
            counter.record(hits);
        }
        ideal.push(doc.to_string());
    }
    Ok(ideal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TopicIndex {
        TopicIndex::default()
            .with_query("q", ["t1", "t2", "t3", "t4"])
            .with_document("big", ["t1", "t2"])
            .with_document("dup", ["t1", "t2"])
            .with_document("other", ["t3"])
            .with_document("miss", ["t9"])
            .with_document("empty", Vec::<String>::new())
    }

    #[test]
    fn novelty_beats_redundancy() {
        let idx = index();
        let ideal = ideal_ranking(&idx, 0.5, "q", &["big", "dup", "other"], 3).unwrap();
        // After "big", "other" adds a fresh topic (1.0) while "dup" adds 2 * 0.5.
        // Equal raw gain: tie goes to the lower id.
        assert_eq!(ideal, vec!["big", "dup", "other"]);

        let ideal = ideal_ranking(&idx, 0.8, "q", &["big", "dup", "other"], 3).unwrap();
        assert_eq!(ideal, vec!["big", "other", "dup"]);
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let idx = index();
        let ideal = ideal_ranking(&idx, 0.5, "q", &["dup", "big"], 1).unwrap();
        assert_eq!(ideal, vec!["big"]);
    }

    #[test]
    fn zero_gain_candidates_fill_the_tail() {
        let idx = index();
        let ideal = ideal_ranking(&idx, 1.0, "q", &["miss", "empty", "other", "big"], 10).unwrap();
        assert_eq!(ideal, vec!["big", "other", "empty", "miss"]);
    }

    #[test]
    fn duplicates_collapse_and_depth_cuts() {
        let idx = index();
        let ideal = ideal_ranking(&idx, 0.5, "q", &["other", "other", "big", "big"], 10).unwrap();
        assert_eq!(ideal, vec!["big", "other"]);

        let ideal = ideal_ranking(&idx, 0.5, "q", &["other", "big", "miss"], 1).unwrap();
        assert_eq!(ideal, vec!["big"]);
    }

    #[test]
    fn empty_pool() {
        let idx = index();
        let none: [&str; 0] = [];
        assert!(ideal_ranking(&idx, 0.5, "q", &none, 5).unwrap().is_empty());
    }

    #[test]
    fn alpha_out_of_range_is_rejected() {
        let idx = index();
        assert!(ideal_ranking(&idx, 1.5, "q", &["big"], 1).is_err());
        assert!(ideal_ranking(&idx, f64::NAN, "q", &["big"], 1).is_err());
    }

    #[test]
    fn unknown_candidate_or_query_fails() {
        let idx = index();
        assert!(ideal_ranking(&idx, 0.5, "q", &["big", "ghost"], 1).is_err());
        assert!(ideal_ranking(&idx, 0.5, "ghost", &["big"], 1).is_err());
    }
}
