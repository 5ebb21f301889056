// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Event handlers that tie the index, the engine and the result region together.
//!
//! The widget is a small owned service object. It holds the session's index,
//! its configuration and the region port, and exposes exactly the two handlers
//! the host page wires up: one for input changes, one for interactions
//! anywhere in the document. Both run to completion synchronously, so a
//! render is always finished before the next event is looked at.

use crate::loader::{LoadError, LoadStatus, SessionIndex};
use crate::region::{RegionState, ResultRegion};
use crate::search::{search, QueryOutcome, SearchOptions};
use crate::types::SearchIndex;
use serde::Deserialize;

/// Default location of the index artifact, relative to the page.
pub const DEFAULT_INDEX_URL: &str = "search_index.json";

/// Default text of the empty-result placeholder.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Widget configuration, as supplied by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Where to fetch the index from (default: "search_index.json")
    pub index_url: String,
    /// Element id of the query input (default: "search-input")
    pub input_id: String,
    /// Element id of the result container (default: "search-results")
    pub results_id: String,
    /// Placeholder shown when nothing matches (default: "No results found")
    pub placeholder: String,
    /// Query engine settings
    #[serde(flatten)]
    pub search: SearchOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            input_id: "search-input".to_string(),
            results_id: "search-results".to_string(),
            placeholder: NO_RESULTS_MESSAGE.to_string(),
            search: SearchOptions::default(),
        }
    }
}

/// What a pointer or click event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTarget {
    /// The query input (or something inside it).
    Input,
    /// The result region (or something inside it, e.g. a result link).
    ResultRegion,
    /// Anywhere else on the page.
    Elsewhere,
}

/// Search-as-you-type over one session's index.
#[derive(Debug)]
pub struct SearchWidget<R: ResultRegion> {
    session: SessionIndex,
    config: WidgetConfig,
    region: R,
    state: RegionState,
}

impl<R: ResultRegion> SearchWidget<R> {
    pub fn new(region: R, config: WidgetConfig) -> Self {
        SearchWidget {
            session: SessionIndex::new(),
            config,
            region,
            state: RegionState::default(),
        }
    }

    /// Hand the widget the outcome of the index load.
    pub fn install_index(&mut self, outcome: Result<SearchIndex, LoadError>) -> bool {
        self.session.install(outcome)
    }

    /// Handle a change of the input's value.
    ///
    /// Returns the number of documents rendered.
    pub fn on_query_changed(&mut self, raw: &str) -> usize {
        let outcome = search(self.session.index(), raw, &self.config.search);
        match outcome {
            QueryOutcome::BelowThreshold => {
                self.region.clear();
                self.region.set_visible(false);
                self.state = self.state.on_short_query();
                0
            }
            QueryOutcome::Matches(docs) => {
                self.region.clear();
                if docs.is_empty() {
                    self.region.render_placeholder(&self.config.placeholder);
                } else {
                    for doc in &docs {
                        self.region.render_entry(doc);
                    }
                }
                self.region.set_visible(true);
                self.state = self.state.on_query();
                docs.len()
            }
        }
    }

    /// Handle a click or tap anywhere in the document.
    pub fn on_outside_interaction(&mut self, target: InteractionTarget) {
        if target != InteractionTarget::Elsewhere {
            return;
        }
        self.region.set_visible(false);
        self.state = self.state.on_outside_interaction();
    }

    /// End of session: drop the index and hide the region.
    pub fn teardown(&mut self) {
        self.session.teardown();
        self.region.clear();
        self.region.set_visible(false);
        self.state = RegionState::default();
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    pub fn load_status(&self) -> LoadStatus {
        self.session.status()
    }

    pub fn index(&self) -> &SearchIndex {
        self.session.index()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}
