//! Subtopic coverage: how many distinct topics the top of a ranking touches.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::topics::{TopicIndex, TopicSet};

/// Distinct topics covered by the first `min(depth, ranking.len())` documents.
///
/// With `relevant_to == None` every topic on those documents counts. With
/// `Some(query_topics)` only topics in that set count.
pub fn covered_topics<'a, S: AsRef<str>>(
    index: &'a TopicIndex,
    ranking: &[S],
    depth: usize,
    relevant_to: Option<&TopicSet>,
) -> Result<BTreeSet<&'a str>> {
    let cutoff = depth.min(ranking.len());
    let mut covered = BTreeSet::new();
    for doc in &ranking[..cutoff] {
        let topics = index.doc_topics(doc.as_ref())?;
        covered.extend(
            topics
                .iter()
                .filter(|t| relevant_to.map_or(true, |q| q.contains(*t)))
                .map(String::as_str),
        );
    }
    Ok(covered)
}

/// Number of distinct topics in [`covered_topics`].
pub fn coverage<S: AsRef<str>>(
    index: &TopicIndex,
    ranking: &[S],
    depth: usize,
    relevant_to: Option<&TopicSet>,
) -> Result<usize> {
    covered_topics(index, ranking, depth, relevant_to).map(|c| c.len())
}
