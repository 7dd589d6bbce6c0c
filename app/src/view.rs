//! View model handed to the presentation layer.
//!
//! A [`TodoView`] is a snapshot: it owns copies of the items so rendering
//! never borrows the store.

use crate::config::RenderMode;
use crate::reducer::TodoAppState;
use crate::types::TodoItem;
use serde::Serialize;
use std::fmt::Write as _;

/// Header shown when no title is configured
pub const DEFAULT_TITLE: &str = "So Much To Do";

/// Label shown instead of a count when the list is empty
pub const EMPTY_LABEL: &str = "Nothing to do";

/// Everything needed to draw the list once
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoView {
    /// Header text
    pub title: String,
    /// Items in insertion order
    pub items: Vec<TodoItem>,
    /// Total number of items
    pub count: usize,
    /// Items still to do
    pub active: usize,
    /// Items marked complete
    pub completed: usize,
    /// Whether the "clear completed" affordance is offered
    pub has_completed: bool,
    /// Text for the count footer
    pub count_label: String,
}

impl TodoView {
    /// Builds a snapshot of `state` under the header `title`
    #[must_use]
    pub fn new(title: &str, state: &TodoAppState) -> Self {
        let count = state.list.count();
        Self {
            title: title.to_string(),
            items: state.list.items().to_vec(),
            count,
            active: state.list.active_count(),
            completed: state.list.completed_count(),
            has_completed: state.list.has_completed(),
            count_label: count_label(count),
        }
    }

    /// Renders the snapshot in the requested mode
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, mode: RenderMode) -> serde_json::Result<String> {
        match mode {
            RenderMode::Text => Ok(self.to_text()),
            RenderMode::Json => serde_json::to_string(self),
        }
    }

    /// Plain-text rendering, one line per item
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.title);
        for item in &self.items {
            let mark = if item.is_complete() { 'x' } else { ' ' };
            let _ = writeln!(out, "[{mark}] {}: {}", item.id(), item.title());
        }
        out.push_str(&self.count_label);
        if self.has_completed {
            let _ = write!(out, "  (type `clear` to remove {} completed)", self.completed);
        }
        out
    }
}

/// Footer label for a list of `count` items
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 0 {
        EMPTY_LABEL.to_string()
    } else {
        format!("Count: {count}")
    }
}
