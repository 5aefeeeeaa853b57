//! Error types for alpha-nDCG evaluation.

use std::fmt;

use thiserror::Error;

/// Which topic mapping an identifier was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Query id, looked up in the query → topics mapping.
    Query,
    /// Document id, looked up in the document → topics mapping.
    Document,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Document => f.write_str("document"),
        }
    }
}

/// Evaluation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A query or document id has no entry in its topic mapping.
    #[error("no topic entry for {kind} `{id}`")]
    MissingEntity {
        /// Mapping the lookup went to.
        kind: EntityKind,
        /// The offending identifier.
        id: String,
    },

    /// Alpha outside `[0, 1]`, or a zero depth.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    pub(crate) fn missing(kind: EntityKind, id: &str) -> Self {
        Self::MissingEntity {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
