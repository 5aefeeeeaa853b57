//! Novelty-discounted cumulative gain (alpha-DCG) and its normalization.
//!
//! For a ranking `d_0, d_1, ...` and a query with topic set `Q`, the gain
//! added at position `i` is
//!
//! \( \sum_{t \in T(d_i) \cap Q} (1-\alpha)^{r_t(i)} / \log_2(2+i) \)
//!
//! where \(r_t(i)\) is the number of documents ranked before `i` that already
//! covered topic `t`. The curve records the running sum.

use std::collections::HashMap;

use crate::config::validate_alpha;
use crate::error::Result;
use crate::topics::{TopicIndex, TopicSet};

/// Logarithmic position discount `1 / log2(2 + position)`, 0-indexed.
///
/// Position 0 has discount 1.0.
pub fn position_discount(position: usize) -> f64 {
    1.0 / ((position + 2) as f64).log2()
}

/// Novelty factor `(1 - alpha)^prior` for a topic already rewarded `prior` times.
///
/// `prior == 0` always gives 1.0, including at `alpha == 1`.
pub fn novelty_factor(alpha: f64, prior: u32) -> f64 {
    (1.0 - alpha).powi(prior.min(i32::MAX as u32) as i32)
}

/// How many times each query topic has been rewarded so far.
///
/// Scratch state owned by a single computation.
#[derive(Debug, Clone)]
pub(crate) struct OccurrenceCounter<'a> {
    counts: HashMap<&'a str, u32>,
}

impl<'a> OccurrenceCounter<'a> {
    pub(crate) fn new(query_topics: &'a TopicSet) -> Self {
        Self {
            counts: query_topics.iter().map(|t| (t.as_str(), 0)).collect(),
        }
    }

    /// Gain the given hits would add at `position`, without recording them.
    pub(crate) fn marginal_gain<'t>(
        &self,
        alpha: f64,
        hits: impl IntoIterator<Item = &'t str>,
        position: usize,
    ) -> f64 {
        let discount = position_discount(position);
        hits.into_iter()
            .map(|t| novelty_factor(alpha, self.count(t)) * discount)
            .sum()
    }

    pub(crate) fn record(&mut self, hits: impl IntoIterator<Item = &'a str>) {
        for t in hits {
            *self.counts.entry(t).or_insert(0) += 1;
        }
    }

    fn count(&self, topic: &str) -> u32 {
        self.counts.get(topic).copied().unwrap_or(0)
    }
}

/// Alpha-DCG curve of `ranking` for `query`, cut at `min(depth, ranking.len())`.
///
/// Every ranked document up to the cutoff must have a topic entry; a missing
/// one aborts the whole curve rather than shifting later positions.
///
/// Alpha outside `[0, 1]` (or NaN) is `InvalidConfiguration`: above 1 the
/// novelty factor turns negative for odd repeat counts and the curve would
/// decrease.
pub fn alpha_dcg<S: AsRef<str>>(
    index: &TopicIndex,
    alpha: f64,
    query: &str,
    ranking: &[S],
    depth: usize,
) -> Result<Vec<f64>> {
    validate_alpha(alpha)?;
    let query_topics = index.query_topics(query)?;
    let cutoff = depth.min(ranking.len());

    let mut counter = OccurrenceCounter::new(query_topics);
    let mut curve = Vec::with_capacity(cutoff);
    let mut value = 0.0;
    for (i, doc) in ranking[..cutoff].iter().enumerate() {
        let hits: Vec<&str> = index.hits(doc.as_ref(), query_topics)?.collect();
        value += counter.marginal_gain(alpha, hits.iter().copied(), i);
        counter.record(hits);
        curve.push(value);
    }
    Ok(curve)
}

/// Divide an observed gain curve by an ideal one, position by position.
///
/// The output has `min(observed.len(), ideal.len())` entries.
///
/// Not the raw `observed / ideal` ratio:
/// - a zero observed value yields 0, and so does a zero ideal value
///   (instead of `NaN` or infinity);
/// - ratios are capped at 1.0. The ideal is built greedily and a ranking can
///   edge past it at some prefix, which the raw ratio would report as > 1.
pub fn normalize(observed: &[f64], ideal: &[f64]) -> Vec<f64> {
    observed
        .iter()
        .zip(ideal)
        .map(|(&o, &i)| {
            if o == 0.0 || i == 0.0 {
                0.0
            } else {
                (o / i).min(1.0)
            }
        })
        .collect()
}
