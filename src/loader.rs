// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: one fetch, one parse, then read-only for the rest of the session.
//!
//! The loader never makes search fail. A missing file, a 404, or a payload that
//! isn't JSON all end the same way: an error record on the diagnostic channel
//! (the `log` facade) and an index that stays empty. Every query against an
//! empty index is well-defined, it just finds nothing.
//!
//! # Lifecycle
//!
//! ```text
//!   Pending ──install(Ok)──▶ Loaded
//!      │
//!      └────install(Err)──▶ Unavailable
//!
//!   any ──teardown()──▶ Pending (index dropped)
//! ```
//!
//! Installs after the first are ignored. There is no retry; recovering from a
//! failed load takes a page reload.

use crate::types::{SearchDocument, SearchIndex};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Why the index could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Reading the artifact from disk failed.
    Io { path: String, message: String },
    /// The network request failed before a response arrived.
    Fetch { url: String, message: String },
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// The payload is not valid JSON.
    Parse { message: String },
    /// The payload is JSON, but its top level is not an array.
    NotAnArray { found: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => {
                write!(f, "failed to read index {}: {}", path, message)
            }
            LoadError::Fetch { url, message } => {
                write!(f, "failed to fetch index {}: {}", url, message)
            }
            LoadError::Status { url, status } => {
                write!(f, "fetching index {} returned HTTP {}", url, status)
            }
            LoadError::Parse { message } => write!(f, "invalid index JSON: {}", message),
            LoadError::NotAnArray { found } => {
                write!(f, "index must be a JSON array, found {}", found)
            }
        }
    }
}

impl std::error::Error for LoadError {}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_entries(raw: &str) -> Result<Vec<Value>, LoadError> {
    let payload: Value = serde_json::from_str(raw).map_err(|e| LoadError::Parse {
        message: e.to_string(),
    })?;
    match payload {
        Value::Array(entries) => Ok(entries),
        other => Err(LoadError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Parse the index artifact into a [`SearchIndex`].
///
/// Entries are taken as-is, in array order. Malformed entries are not
/// rejected; see [`SearchDocument::from_value`].
pub fn parse_index(raw: &str) -> Result<SearchIndex, LoadError> {
    let entries = parse_entries(raw)?;
    let docs: Vec<SearchDocument> = entries.iter().map(SearchDocument::from_value).collect();
    log::debug!("parsed search index with {} documents", docs.len());
    Ok(SearchIndex::new(docs))
}

/// Read and parse an index artifact from disk.
pub fn load_index_file(path: impl AsRef<Path>) -> Result<SearchIndex, LoadError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_index(&raw)
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Where the session's index is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load has completed yet. Queries see an empty index.
    #[default]
    Pending,
    /// The index was installed and is now frozen.
    Loaded,
    /// The load failed. Queries see an empty index until the page reloads.
    Unavailable,
}

/// The index as owned by one page session.
///
/// Write-once: the first [`install`](Self::install) decides the outcome.
#[derive(Debug, Default)]
pub struct SessionIndex {
    index: SearchIndex,
    status: LoadStatus,
}

impl SessionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of the one load this session gets.
    ///
    /// Returns `true` when the outcome was accepted. Failures are logged and
    /// leave the index empty; they are never handed back to the caller.
    pub fn install(&mut self, outcome: Result<SearchIndex, LoadError>) -> bool {
        if self.status != LoadStatus::Pending {
            log::warn!(
                "search index already settled ({:?}); ignoring a second load",
                self.status
            );
            return false;
        }

        match outcome {
            Ok(index) => {
                log::info!("search index loaded: {} documents", index.len());
                self.index = index;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::error!("search index unavailable: {}", err);
                self.status = LoadStatus::Unavailable;
            }
        }
        true
    }

    /// Drop the index at the end of the session.
    pub fn teardown(&mut self) {
        self.index = SearchIndex::default();
        self.status = LoadStatus::Pending;
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// The index queries run against. Empty unless the load succeeded.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}

// =============================================================================
// AUDIT
// =============================================================================

/// One entry with a field the engine will show as blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    /// Position in the artifact's array.
    pub position: usize,
    /// Fields that are missing or not strings.
    pub fields: Vec<&'static str>,
}

/// Data-quality summary of an index artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexAudit {
    pub documents: usize,
    pub text_bytes: usize,
    /// Document count per feed label, sorted by label.
    pub feeds: BTreeMap<String, usize>,
    pub malformed: Vec<MalformedEntry>,
}

const FIELDS: [&str; 4] = ["title", "text", "url", "feed"];

/// Inspect an artifact for entries the engine would render with blanks.
///
/// Only for operator tooling; the engine itself loads such entries unchanged.
pub fn audit_index(raw: &str) -> Result<IndexAudit, LoadError> {
    let entries = parse_entries(raw)?;
    let mut audit = IndexAudit {
        documents: entries.len(),
        ..IndexAudit::default()
    };

    for (position, entry) in entries.iter().enumerate() {
        let fields: Vec<&'static str> = FIELDS
            .into_iter()
            .filter(|name| !matches!(entry.get(*name), Some(Value::String(_))))
            .collect();
        if !fields.is_empty() {
            audit.malformed.push(MalformedEntry { position, fields });
        }

        let doc = SearchDocument::from_value(entry);
        audit.text_bytes += doc.text.len();
        *audit.feeds.entry(doc.feed).or_insert(0) += 1;
    }

    Ok(audit)
}
