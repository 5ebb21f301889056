//! The result region: where matches are drawn, and whether anyone can see them.
//!
//! The engine never touches a DOM directly. It talks to a [`ResultRegion`],
//! which the browser build implements over a container element and tests
//! implement in memory.
//!
//! # State machine
//!
//! ```text
//!                    input >= threshold
//!   ┌─────────────┐ ─────────────────────▶ ┌─────────┐
//!   │ HiddenEmpty │                        │ Visible │◀──┐ input >= threshold
//!   └─────────────┘ ◀───────────────────── └─────────┘ ──┘
//!          ▲         input < threshold          │
//!          │                                    │ outside interaction
//!          │ input < threshold                  ▼
//!          │                         ┌───────────────────┐
//!          └──────────────────────── │ HiddenWithContent │
//!                                    └───────────────────┘
//! ```
//!
//! `HiddenWithContent` goes back to `Visible` on the next query at or above
//! the threshold. There is no terminal state.

use crate::types::SearchDocument;

/// Output port for rendered results.
///
/// Calls arrive in a fixed shape: `clear`, then either one
/// `render_placeholder` or any number of `render_entry`, then `set_visible`.
pub trait ResultRegion {
    /// Remove all rendered content.
    fn clear(&mut self);

    /// Append the "no results" placeholder.
    fn render_placeholder(&mut self, message: &str);

    /// Append one result: `title` linking to `url`, annotated with `feed`.
    fn render_entry(&mut self, doc: &SearchDocument);

    /// Show or hide the region. Content is left as is.
    fn set_visible(&mut self, visible: bool);
}

/// Visibility and content of the result region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionState {
    /// Hidden with nothing rendered. The initial state.
    #[default]
    HiddenEmpty,
    /// Hidden by an outside interaction; the last render is still there.
    HiddenWithContent,
    /// Showing the current match set (or the placeholder).
    Visible,
}

impl RegionState {
    pub fn is_visible(self) -> bool {
        self == RegionState::Visible
    }

    /// State after a query below the threshold.
    pub fn on_short_query(self) -> RegionState {
        RegionState::HiddenEmpty
    }

    /// State after a query at or above the threshold.
    pub fn on_query(self) -> RegionState {
        RegionState::Visible
    }

    /// State after a click or tap outside the input and the region.
    pub fn on_outside_interaction(self) -> RegionState {
        match self {
            RegionState::Visible => RegionState::HiddenWithContent,
            other => other,
        }
    }
}
