//! Search-as-you-type over a static site's transcript index.
//!
//! The site generator writes one flat JSON array of documents (title, body
//! text, link, feed label). This crate loads that array once and, on every
//! keystroke, returns the first documents whose title or text contains the
//! query. No tokenizing, no stemming, no scoring: a lowercase substring test,
//! index order, and a hard cap.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│   types.rs   │────▶│  search.rs  │────▶│  region.rs  │
//! │ (parse_index│     │ (SearchIndex,│     │  (search,   │     │(ResultRegion│
//! │ SessionIndex│     │ SearchDoc-   │     │ QueryOutcome│     │ RegionState)│
//! └─────────────┘     │  ument)      │     └─────────────┘     └─────────────┘
//!                     └──────────────┘            │                   │
//!                                                 ▼                   ▼
//!                              ┌─────────────────────────────────────────────┐
//!                              │                 widget.rs                    │
//!                              │  (SearchWidget: on_query_changed,            │
//!                              │   on_outside_interaction)                    │
//!                              └─────────────────────────────────────────────┘
//!                                                 │
//!                                                 ▼
//!                                   wasm.rs (DomRegion, PodsiftWidget)
//! ```
//!
//! Data flows one way. The loader writes the index once; everything after
//! it only reads.
//!
//! # Usage
//!
//! ```
//! use podsift::{parse_index, search, SearchOptions};
//!
//! let index = parse_index(
//!     r#"[{"title": "Episode One", "text": "discusses cats", "url": "/e1", "feed": "ShowA"}]"#,
//! )
//! .unwrap();
//!
//! let outcome = search(&index, "cat", &SearchOptions::default());
//! assert_eq!(outcome.documents()[0].url, "/e1");
//! ```

// Module declarations
pub mod contracts;
mod loader;
mod region;
mod search;
pub mod testing;
mod types;
mod widget;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for public API
pub use loader::{
    audit_index, load_index_file, parse_index, IndexAudit, LoadError, LoadStatus, MalformedEntry,
    SessionIndex,
};
pub use region::{RegionState, ResultRegion};
pub use search::{
    normalize_query, search, QueryOutcome, SearchOptions, MAX_RESULTS, MIN_QUERY_LEN,
};
pub use types::{IndexedDocument, SearchDocument, SearchIndex};
pub use widget::{
    InteractionTarget, SearchWidget, WidgetConfig, DEFAULT_INDEX_URL, NO_RESULTS_MESSAGE,
};
