// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the podsift command-line interface.
//!
//! Two subcommands: `search` runs a query against an index artifact exactly
//! the way the page does, and `inspect` summarizes an artifact and points out
//! entries that will render with blank fields.

pub mod display;

use clap::{Parser, Subcommand};
use podsift::{MAX_RESULTS, MIN_QUERY_LEN};

#[derive(Parser)]
#[command(
    name = "podsift",
    about = "Substring search over a static site's transcript index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index artifact
    Search {
        /// Path to the index JSON (array of {title, text, url, feed})
        #[arg(short, long, default_value = "docs/search_index.json")]
        index: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,

        /// Shortest query that runs, in characters
        #[arg(long, default_value_t = MIN_QUERY_LEN)]
        min_len: usize,

        /// Query text (matched case-insensitively as a substring)
        query: String,
    },

    /// Summarize an index artifact and report malformed entries
    Inspect {
        /// Path to the index JSON
        file: String,
    },
}
