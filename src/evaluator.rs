//! The alpha-nDCG evaluator: topic mappings plus configuration, with the
//! last batch results kept around for inspection.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::config::{validate_alpha, validate_depth, AlphaNdcgConfig, CoverageScope};
use crate::coverage;
use crate::error::Result;
use crate::gain;
use crate::ideal;
use crate::topics::TopicIndex;

/// Query id → ranked document ids.
pub type Rankings = BTreeMap<String, Vec<String>>;

/// Query id → curve (gain or normalized), one value per rank position.
pub type Curves = BTreeMap<String, Vec<f64>>;

/// Alpha-nDCG evaluator.
///
/// The single-query methods take `&self` and only touch per-call scratch
/// state, so one evaluator can serve parallel queries behind a shared
/// reference. The `compute_*` methods overwrite the stored
/// [`dcg_values`](Self::dcg_values) / [`ndcg_values`](Self::ndcg_values)
/// and need `&mut self`.
#[derive(Debug, Clone)]
pub struct AlphaNdcg {
    index: TopicIndex,
    config: AlphaNdcgConfig,
    dcg_values: Curves,
    ndcg_values: Curves,
}

impl AlphaNdcg {
    /// Create an evaluator over `index`.
    pub fn new(index: TopicIndex, config: AlphaNdcgConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            index,
            config,
            dcg_values: Curves::new(),
            ndcg_values: Curves::new(),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &AlphaNdcgConfig {
        &self.config
    }

    /// Topic mappings in use.
    pub fn index(&self) -> &TopicIndex {
        &self.index
    }

    /// Change alpha. On error the old value is kept.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        validate_alpha(alpha)?;
        self.config.alpha = alpha;
        Ok(())
    }

    /// Change which topics [`subtopic_coverage`](Self::subtopic_coverage) counts.
    pub fn set_coverage_scope(&mut self, scope: CoverageScope) {
        self.config.coverage = scope;
    }

    /// Replace the query → topics mapping, e.g. with `[("q1", vec!["t1", "t2"])]`.
    pub fn load_query_topics<M, K, V, T>(&mut self, query_topics: M)
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.index.set_query_topics(query_topics);
    }

    /// Replace the document → topics mapping.
    pub fn load_doc_topics<M, K, V, T>(&mut self, doc_topics: M)
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.index.set_doc_topics(doc_topics);
    }

    /// Gain curves from the last [`compute_alpha_dcg`](Self::compute_alpha_dcg)
    /// or [`compute_alpha_ndcg`](Self::compute_alpha_ndcg).
    pub fn dcg_values(&self) -> &Curves {
        &self.dcg_values
    }

    /// Normalized curves from the last [`compute_alpha_ndcg`](Self::compute_alpha_ndcg).
    pub fn ndcg_values(&self) -> &Curves {
        &self.ndcg_values
    }

    /// Alpha-DCG curve for one ranking.
    pub fn alpha_dcg<S: AsRef<str>>(
        &self,
        query: &str,
        ranking: &[S],
        depth: usize,
    ) -> Result<Vec<f64>> {
        validate_depth(depth)?;
        gain::alpha_dcg(&self.index, self.config.alpha, query, ranking, depth)
    }

    /// Alpha-DCG curve for every query in `rankings`.
    pub fn alpha_dcg_batch(&self, rankings: &Rankings, depth: usize) -> Result<Curves> {
        validate_depth(depth)?;
        rankings
            .iter()
            .map(|(query, ranking)| -> Result<(String, Vec<f64>)> {
                let curve = gain::alpha_dcg(&self.index, self.config.alpha, query, ranking, depth)?;
                debug!(query = query.as_str(), len = curve.len(), "alpha-DCG");
                Ok((query.clone(), curve))
            })
            .collect()
    }

    /// [`alpha_dcg_batch`](Self::alpha_dcg_batch), storing the result in
    /// [`dcg_values`](Self::dcg_values).
    pub fn compute_alpha_dcg(&mut self, rankings: &Rankings, depth: usize) -> Result<()> {
        self.dcg_values = self.alpha_dcg_batch(rankings, depth)?;
        Ok(())
    }

    /// Alpha-DCG and alpha-nDCG for every query in `rankings`.
    ///
    /// Each query is normalized against the greedy ideal ranking of its own
    /// ranked documents, cut at `min(depth, ranking.len())`. Both stored curve
    /// maps are replaced; a failing query leaves them as they were.
    pub fn compute_alpha_ndcg(&mut self, rankings: &Rankings, depth: usize) -> Result<()> {
        let dcg = self.alpha_dcg_batch(rankings, depth)?;
        let mut ndcg = Curves::new();
        for (query, ranking) in rankings {
            let local_depth = depth.min(ranking.len());
            let reference =
                ideal::ideal_ranking(&self.index, self.config.alpha, query, ranking, local_depth)?;
            let ideal_curve =
                gain::alpha_dcg(&self.index, self.config.alpha, query, &reference, local_depth)?;
            let observed = dcg.get(query).map(Vec::as_slice).unwrap_or_default();
            let normalized = gain::normalize(observed, &ideal_curve);
            debug!(
                query = query.as_str(),
                len = normalized.len(),
                last = normalized.last().copied().unwrap_or(0.0),
                "alpha-nDCG"
            );
            ndcg.insert(query.clone(), normalized);
        }
        self.dcg_values = dcg;
        self.ndcg_values = ndcg;
        Ok(())
    }

    /// Greedy ideal ranking for `query` over `candidates`.
    pub fn ideal_ranking<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
        depth: usize,
    ) -> Result<Vec<String>> {
        validate_depth(depth)?;
        ideal::ideal_ranking(&self.index, self.config.alpha, query, candidates, depth)
    }

    /// Alpha-nDCG of `target` normalized by a caller-supplied `ideal` ranking.
    ///
    /// The curve length is `min(depth, target.len(), ideal.len())`. The ideal
    /// may come from another query's pool, e.g. one reference ranking used to
    /// compare several systems.
    pub fn alpha_ndcg_against<S: AsRef<str>, I: AsRef<str>>(
        &self,
        query: &str,
        target: &[S],
        ideal: &[I],
        depth: usize,
    ) -> Result<Vec<f64>> {
        validate_depth(depth)?;
        let local_depth = depth.min(target.len()).min(ideal.len());
        let alpha = self.config.alpha;
        let observed = gain::alpha_dcg(&self.index, alpha, query, target, local_depth)?;
        let ideal_curve = gain::alpha_dcg(&self.index, alpha, query, ideal, local_depth)?;
        Ok(gain::normalize(&observed, &ideal_curve))
    }

    /// Number of distinct topics covered by the top `depth` documents.
    ///
    /// Under [`CoverageScope::AllTopics`] `query` is not looked up; under
    /// [`CoverageScope::QueryTopics`] it must exist.
    pub fn subtopic_coverage<S: AsRef<str>>(
        &self,
        query: &str,
        ranking: &[S],
        depth: usize,
    ) -> Result<usize> {
        self.covered_subtopics(query, ranking, depth).map(|c| c.len())
    }

    /// The distinct topics behind [`subtopic_coverage`](Self::subtopic_coverage).
    pub fn covered_subtopics<S: AsRef<str>>(
        &self,
        query: &str,
        ranking: &[S],
        depth: usize,
    ) -> Result<BTreeSet<&str>> {
        validate_depth(depth)?;
        let relevant_to = match self.config.coverage {
            CoverageScope::AllTopics => None,
            CoverageScope::QueryTopics => Some(self.index.query_topics(query)?),
        };
        coverage::covered_topics(&self.index, ranking, depth, relevant_to)
    }
}
