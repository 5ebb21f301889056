// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: lowercase, gate, scan, cap.
//!
//! There is no ranking here. A document matches when its lowercased title or
//! lowercased text contains the lowercased query, and results come back in
//! index order, cut off after `max_results`. Every call starts from scratch;
//! nothing is carried over from the previous keystroke.

use crate::contracts::check_search_results;
use crate::types::{SearchDocument, SearchIndex};
use serde::Deserialize;

/// Queries shorter than this (in characters) are not run.
pub const MIN_QUERY_LEN: usize = 2;

/// Hard cap on the number of documents a query returns.
pub const MAX_RESULTS: usize = 10;

/// Query engine settings.
///
/// Deserializable from a JS options object or JSON; absent keys keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Minimum normalized query length, in characters (default: 2)
    pub min_query_len: usize,
    /// Maximum number of results (default: 10)
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_results: MAX_RESULTS,
        }
    }
}

/// What a single query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    /// The query was too short to run. The result region should be cleared and hidden.
    BelowThreshold,
    /// The query ran. Possibly empty, never longer than `max_results`.
    Matches(Vec<&'a SearchDocument>),
}

impl<'a> QueryOutcome<'a> {
    /// The matched documents; empty for a below-threshold query.
    pub fn documents(&self) -> &[&'a SearchDocument] {
        match self {
            QueryOutcome::BelowThreshold => &[],
            QueryOutcome::Matches(docs) => docs,
        }
    }

    pub fn is_below_threshold(&self) -> bool {
        matches!(self, QueryOutcome::BelowThreshold)
    }
}

/// Normalize raw input into a query. Lowercases only; whitespace is kept.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Run one query against the index.
///
/// Total: defined for every input, including an empty index.
pub fn search<'a>(
    index: &'a SearchIndex,
    raw: &str,
    options: &SearchOptions,
) -> QueryOutcome<'a> {
    let query = normalize_query(raw);
    if query.chars().count() < options.min_query_len {
        return QueryOutcome::BelowThreshold;
    }

    let results: Vec<&SearchDocument> = index
        .entries()
        .iter()
        .filter(|entry| entry.matches(&query))
        .map(|entry| &entry.doc)
        .take(options.max_results)
        .collect();

    check_search_results(index, &query, &results, options.max_results);
    QueryOutcome::Matches(results)
}
