//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::region::ResultRegion;
use crate::types::SearchDocument;

/// Turn a title into the page slug the site generator would use.
fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a simple test document with default fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, title: &str) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        text: String::new(),
        url: format!("/episodes/{}-{}.html", id, slug(title)),
        feed: "Test Feed".to_string(),
    }
}

/// Create a test document with body text and a feed label.
pub fn make_doc_with_text(title: &str, text: &str, feed: &str) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        text: text.to_string(),
        url: format!("/episodes/{}.html", slug(title)),
        feed: feed.to_string(),
    }
}

/// Serialize documents into an index artifact.
pub fn index_json(docs: &[SearchDocument]) -> String {
    serde_json::to_string(docs).unwrap_or_else(|_| "[]".to_string())
}

/// One call made against a [`RecordingRegion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionCall {
    Clear,
    Placeholder(String),
    Entry {
        title: String,
        url: String,
        feed: String,
    },
    SetVisible(bool),
}

/// In-memory result region that records every call.
#[derive(Debug, Default)]
pub struct RecordingRegion {
    /// Every call, in order.
    pub calls: Vec<RegionCall>,
    /// Current visibility.
    pub visible: bool,
    /// Current content: what was rendered since the last `clear`.
    pub content: Vec<RegionCall>,
}

impl RecordingRegion {
    /// Titles of the entries currently rendered.
    pub fn titles(&self) -> Vec<String> {
        self.content
            .iter()
            .filter_map(|call| match call {
                RegionCall::Entry { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the placeholder is currently rendered.
    pub fn shows_placeholder(&self) -> bool {
        self.content
            .iter()
            .any(|call| matches!(call, RegionCall::Placeholder(_)))
    }
}

impl ResultRegion for RecordingRegion {
    fn clear(&mut self) {
        self.calls.push(RegionCall::Clear);
        self.content.clear();
    }

    fn render_placeholder(&mut self, message: &str) {
        let call = RegionCall::Placeholder(message.to_string());
        self.calls.push(call.clone());
        self.content.push(call);
    }

    fn render_entry(&mut self, doc: &SearchDocument) {
        let call = RegionCall::Entry {
            title: doc.title.clone(),
            url: doc.url.clone(),
            feed: doc.feed.clone(),
        };
        self.calls.push(call.clone());
        self.content.push(call);
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(RegionCall::SetVisible(visible));
        self.visible = visible;
    }
}

/// Region that keeps nothing. For benchmarks, where recording every call
/// would time the test double instead of the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardRegion;

impl ResultRegion for DiscardRegion {
    fn clear(&mut self) {}

    fn render_placeholder(&mut self, message: &str) {
        std::hint::black_box(message);
    }

    fn render_entry(&mut self, doc: &SearchDocument) {
        std::hint::black_box(doc);
    }

    fn set_visible(&mut self, visible: bool) {
        std::hint::black_box(visible);
    }
}

// =============================================================================
// SIMULATED ARCHIVES
// =============================================================================

/// Spoken-word vocabulary; transcripts are heavy on filler.
pub const ARCHIVE_WORDS: &[&str] = &[
    "so", "um", "yeah", "right", "like", "you", "know", "the", "and", "we", "were", "talking",
    "about", "guest", "episode", "interview", "question", "answer", "story", "history", "music",
    "science", "climate", "economy", "election", "football", "recipe", "garden", "travel",
    "book", "film", "startup", "privacy", "security", "software", "hardware", "weather",
    "community", "museum", "coffee", "sleep", "health", "running", "cycling",
];

/// Coprime with `ARCHIVE_WORDS.len()`, so a transcript cycles through the whole vocabulary.
const WORD_STRIDE: usize = 7;

/// Mentioned only in episodes whose number is a multiple of `RARE_EVERY`.
pub const RARE_TERM: &str = "festival";
pub const RARE_EVERY: usize = 50;

const ARCHIVE_FEEDS: &[&str] = &["Morning Brief", "Deep Dive", "Listener Mailbag"];

/// A transcript of `word_count` filler words, offset by `seed`.
pub fn make_transcript(word_count: usize, seed: usize) -> String {
    let mut transcript = (0..word_count)
        .map(|i| ARCHIVE_WORDS[(seed * 3 + i * WORD_STRIDE) % ARCHIVE_WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ");
    if seed % RARE_EVERY == 0 {
        transcript.push_str(" see you at the ");
        transcript.push_str(RARE_TERM);
    }
    transcript
}

/// A podcast archive of `episodes` documents spread over three feeds.
pub fn make_archive(episodes: usize, words_per_episode: usize) -> Vec<SearchDocument> {
    let words = ARCHIVE_WORDS;
    (0..episodes)
        .map(|i| SearchDocument {
            title: format!(
                "Episode {}: {} and {}",
                i,
                words[i % words.len()],
                words[(i + 11) % words.len()]
            ),
            text: make_transcript(words_per_episode, i),
            url: format!("/episodes/{}.html", i),
            feed: ARCHIVE_FEEDS[i % ARCHIVE_FEEDS.len()].to_string(),
        })
        .collect()
}
