//! Query and document topic mappings.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{EntityKind, Error, Result};

/// A set of subtopic identifiers.
pub type TopicSet = BTreeSet<String>;

/// Read-only reference data: which subtopics each query asks for and which
/// subtopics each document covers.
///
/// Topic membership is binary. A document with an empty set is a valid
/// document that covers nothing; a document with no entry at all is an error
/// at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicIndex {
    #[serde(default)]
    query_topics: HashMap<String, TopicSet>,
    #[serde(default)]
    doc_topics: HashMap<String, TopicSet>,
}

impl TopicIndex {
    /// Build an index from query and document topic lists.
    ///
    /// Duplicate topics within one list collapse.
    pub fn new<Q, D, K, V, T>(query_topics: Q, doc_topics: D) -> Self
    where
        Q: IntoIterator<Item = (K, V)>,
        D: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            query_topics: collect_mapping(query_topics),
            doc_topics: collect_mapping(doc_topics),
        }
    }

    /// Add or replace a query's topic set.
    #[must_use]
    pub fn with_query<T: Into<String>>(
        mut self,
        query: impl Into<String>,
        topics: impl IntoIterator<Item = T>,
    ) -> Self {
        self.query_topics
            .insert(query.into(), topics.into_iter().map(Into::into).collect());
        self
    }

    /// Add or replace a document's topic set.
    #[must_use]
    pub fn with_document<T: Into<String>>(
        mut self,
        doc: impl Into<String>,
        topics: impl IntoIterator<Item = T>,
    ) -> Self {
        self.doc_topics
            .insert(doc.into(), topics.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the whole query → topics mapping.
    ///
    /// Accepts the same shapes as [`TopicIndex::new`].
    pub fn set_query_topics<M, K, V, T>(&mut self, query_topics: M)
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.query_topics = collect_mapping(query_topics);
    }

    /// Replace the whole document → topics mapping.
    pub fn set_doc_topics<M, K, V, T>(&mut self, doc_topics: M)
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.doc_topics = collect_mapping(doc_topics);
    }

    /// Topics relevant to `query`.
    pub fn query_topics(&self, query: &str) -> Result<&TopicSet> {
        self.query_topics
            .get(query)
            .ok_or_else(|| Error::missing(EntityKind::Query, query))
    }

    /// Topics covered by `doc`.
    pub fn doc_topics(&self, doc: &str) -> Result<&TopicSet> {
        self.doc_topics
            .get(doc)
            .ok_or_else(|| Error::missing(EntityKind::Document, doc))
    }

    /// Topics of `doc` that are also in `query_topics`.
    pub(crate) fn hits<'a>(
        &'a self,
        doc: &str,
        query_topics: &'a TopicSet,
    ) -> Result<impl Iterator<Item = &'a str> + 'a> {
        let doc_topics = self.doc_topics(doc)?;
        Ok(doc_topics.intersection(query_topics).map(String::as_str))
    }

    /// Number of queries with a topic entry.
    pub fn num_queries(&self) -> usize {
        self.query_topics.len()
    }

    /// Number of documents with a topic entry.
    pub fn num_documents(&self) -> usize {
        self.doc_topics.len()
    }
}

fn collect_mapping<M, K, V, T>(mapping: M) -> HashMap<String, TopicSet>
where
    M: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = T>,
    T: Into<String>,
{
    mapping
        .into_iter()
        .map(|(id, topics)| (id.into(), topics.into_iter().map(Into::into).collect()))
        .collect()
}
