//! `alphandcg`: diversity-aware evaluation kernels for IR.
//!
//! Implements alpha-nDCG (Clarke et al., 2008): a ranking is rewarded for
//! covering the subtopics of a query, and each further document that covers
//! an already-seen subtopic earns a geometrically smaller reward,
//! `(1 - alpha)^k` for the `k`-th repeat.
//!
//! This crate is intentionally **I/O-free**: topic judgments and rankings
//! come in as in-memory maps; parsing qrels or run files is the caller's job.
//!
//! | Item | What it computes |
//! |------|------------------|
//! | [`alpha_dcg`] | cumulative novelty-discounted gain curve of one ranking |
//! | [`ideal_ranking`] | greedy best-achievable ordering of a candidate pool |
//! | [`normalize`] | position-wise ratio of two gain curves |
//! | [`coverage()`] | distinct subtopics in the top-k documents |
//! | [`AlphaNdcg`] | the above over a [`TopicIndex`], batch and single-query |
//!
//! ```rust
//! use alphandcg::{AlphaNdcg, AlphaNdcgConfig, TopicIndex};
//!
//! let index = TopicIndex::default()
//!     .with_query("q", ["t1", "t2"])
//!     .with_document("a", ["t1"])
//!     .with_document("b", ["t1"])
//!     .with_document("c", ["t2"]);
//! let eval = AlphaNdcg::new(index, AlphaNdcgConfig::default()).unwrap();
//!
//! let ideal = eval.ideal_ranking("q", &["a", "b", "c"], 3).unwrap();
//! assert_eq!(ideal, vec!["a", "c", "b"]);
//!
//! let ndcg = eval.alpha_ndcg_against("q", &["a", "b", "c"], &ideal, 3).unwrap();
//! assert_eq!(ndcg[0], 1.0);
//! assert!(ndcg[1] < 1.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod coverage;
pub mod error;
pub mod evaluator;
pub mod gain;
pub mod ideal;
pub mod topics;

pub use config::{AlphaNdcgConfig, CoverageScope, DEFAULT_ALPHA, DEFAULT_DEPTH};
pub use coverage::{coverage, covered_topics};
pub use error::{EntityKind, Error, Result};
pub use evaluator::{AlphaNdcg, Curves, Rankings};
pub use gain::{alpha_dcg, normalize, novelty_factor, position_discount};
pub use ideal::ideal_ranking;
pub use topics::{TopicIndex, TopicSet};
