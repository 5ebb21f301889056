// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! An index is nothing more than the ordered list of documents the site
//! generator wrote out. Order matters: it is the only tie-break the engine
//! has, and the result cap keeps the *first* matches in that order.
//!
//! # Invariants
//!
//! - **SearchIndex**: `entries[i].title_lower == entries[i].doc.title.to_lowercase()`
//!   and likewise for `text_lower`. The cache is built once at load and never
//!   touched again, so it cannot drift from the document it shadows.
//!
//! - **SearchIndex**: entry order is the order of the artifact's array.
//!   Nothing in this crate sorts, dedups, or reorders entries.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One searchable unit: an episode transcript page, in practice.
///
/// All four fields are plain strings. The artifact is not schema-checked, so
/// deserialization is lenient: a missing or `null` field becomes `""`, and a
/// scalar of the wrong type is rendered as its JSON text. `Deserialize` goes
/// through [`SearchDocument::from_value`], the same path the loader takes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchDocument {
    /// Display title, also matched against the query.
    pub title: String,
    /// Full body text (transcript). Matched, never displayed.
    pub text: String,
    /// Link destination. Opaque to the engine.
    pub url: String,
    /// Grouping label (source feed name). Displayed, never matched.
    pub feed: String,
}

impl SearchDocument {
    /// Build a document from one element of the artifact's array.
    ///
    /// Never fails. Anything that isn't an object yields an all-blank document,
    /// which still occupies its slot so index order is preserved.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).map(value_to_text).unwrap_or_default();
        SearchDocument {
            title: field("title"),
            text: field("text"),
            url: field("url"),
            feed: field("feed"),
        }
    }
}

/// Render a JSON value the way a duck-typed consumer would display it.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl<'de> Deserialize<'de> for SearchDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(SearchDocument::from_value(&value))
    }
}

/// A document paired with its lowercased match fields.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub doc: SearchDocument,
    pub title_lower: String,
    pub text_lower: String,
}

impl IndexedDocument {
    pub fn new(doc: SearchDocument) -> Self {
        let title_lower = doc.title.to_lowercase();
        let text_lower = doc.text.to_lowercase();
        IndexedDocument {
            doc,
            title_lower,
            text_lower,
        }
    }

    /// Containment test against an already-lowercased query.
    #[inline]
    pub fn matches(&self, query_lower: &str) -> bool {
        self.title_lower.contains(query_lower) || self.text_lower.contains(query_lower)
    }
}

/// The in-memory index: an ordered, read-only sequence of documents.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexedDocument>,
}

impl SearchIndex {
    /// Build an index, computing the lowercase cache for every document.
    pub fn new(docs: Vec<SearchDocument>) -> Self {
        SearchIndex {
            entries: docs.into_iter().map(IndexedDocument::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in artifact order.
    pub fn entries(&self) -> &[IndexedDocument] {
        &self.entries
    }

    /// Documents in artifact order.
    pub fn docs(&self) -> impl Iterator<Item = &SearchDocument> + '_ {
        self.entries.iter().map(|entry| &entry.doc)
    }

    /// Total bytes of body text held by the index.
    pub fn text_bytes(&self) -> usize {
        self.entries.iter().map(|entry| entry.doc.text.len()).sum()
    }
}

impl FromIterator<SearchDocument> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = SearchDocument>>(iter: I) -> Self {
        SearchIndex::new(iter.into_iter().collect())
    }
}
