//! Evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Novelty discount used when none is given (Clarke et al., 2008).
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Rank cutoff conventionally used for alpha-nDCG@k reporting.
pub const DEFAULT_DEPTH: usize = 20;

/// Which topics the coverage counter counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageScope {
    /// Every topic attached to the ranked documents, relevant to the query or not.
    #[default]
    AllTopics,
    /// Only topics in the query's topic set.
    QueryTopics,
}

/// Configuration for [`AlphaNdcg`](crate::AlphaNdcg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaNdcgConfig {
    /// Novelty discount in `[0, 1]`.
    /// - `alpha=0`: no redundancy penalty (plain binary DCG over topics)
    /// - `alpha=1`: a topic is only rewarded the first time it appears
    pub alpha: f64,
    /// Topics counted by the coverage counter.
    #[serde(default)]
    pub coverage: CoverageScope,
}

impl Default for AlphaNdcgConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            coverage: CoverageScope::AllTopics,
        }
    }
}

impl AlphaNdcgConfig {
    /// Create config with a custom alpha.
    #[must_use]
    pub const fn new(alpha: f64) -> Self {
        Self {
            alpha,
            coverage: CoverageScope::AllTopics,
        }
    }

    /// Set alpha.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the coverage scope.
    #[must_use]
    pub const fn with_coverage(mut self, coverage: CoverageScope) -> Self {
        self.coverage = coverage;
        self
    }

    /// Reject alpha outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)
    }
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "alpha must be in [0, 1], got {alpha}"
        )))
    }
}

pub(crate) fn validate_depth(depth: usize) -> Result<()> {
    if depth == 0 {
        return Err(Error::InvalidConfiguration(
            "depth must be at least 1".to_string(),
        ));
    }
    Ok(())
}
