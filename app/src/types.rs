//! Domain types for the to-do list.
//!
//! [`TodoListState`] owns the items and the id counter. Every operation on it
//! is total: input that would not change anything (empty text, an unknown id)
//! leaves the state untouched instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a to-do item
///
/// Ids are allocated in increasing order starting at 0 and are never reused
/// within a list, even after the item is removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id allocated right after this one, `None` once ids run out
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single to-do item
///
/// Items are values: toggling builds a new item rather than mutating one that
/// may be shared with an earlier snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: TodoId,
    title: String,
    complete: bool,
}

impl TodoItem {
    const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            complete: false,
        }
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Title, never empty
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is completed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// A copy of this item with `complete` set to `complete`
    #[must_use]
    pub fn with_complete(&self, complete: bool) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            complete,
        }
    }

    /// A copy of this item with `complete` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_complete(!self.complete)
    }
}

/// State of the to-do list
///
/// Items are kept in insertion order; nothing reorders them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoListState {
    items: Vec<TodoItem>,
    /// Id the next add allocates; above every id handed out so far
    next_id: TodoId,
}

impl TodoListState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: TodoId::new(0),
        }
    }

    /// Appends a new incomplete item titled `text`
    ///
    /// Empty text is ignored: nothing changes and `None` is returned. No
    /// trimming is applied, so whitespace-only text is accepted. Once every
    /// id has been handed out further adds are ignored the same way.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let id = self.next_id();
        self.insert(id, text.into()).then_some(id)
    }

    /// Flips `complete` on the item with `id`
    ///
    /// Unknown ids are ignored. Returns the updated sequence.
    pub fn toggle_complete(&mut self, id: TodoId) -> &[TodoItem] {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            *item = item.toggled();
        }
        &self.items
    }

    /// Sets `complete` on the item with `id` to an explicit value
    ///
    /// Unknown ids are ignored. Returns true if an item matched.
    pub fn set_complete(&mut self, id: TodoId, complete: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = item.with_complete(complete);
                true
            },
            None => false,
        }
    }

    /// Removes the item with `id`
    ///
    /// Unknown ids leave the sequence as it was. Returns the updated sequence.
    pub fn remove(&mut self, id: TodoId) -> &[TodoItem] {
        self.items.retain(|item| item.id != id);
        &self.items
    }

    /// Removes every completed item, keeping the rest in order
    ///
    /// Idempotent. Returns the updated sequence.
    pub fn remove_completed(&mut self) -> &[TodoItem] {
        self.items.retain(|item| !item.complete);
        &self.items
    }

    /// Total number of items, complete or not
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// True iff at least one item is complete
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.items.iter().any(TodoItem::is_complete)
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.complete).count()
    }

    /// Number of items still to do
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    /// Ids of the completed items, in list order
    #[must_use]
    pub fn completed_ids(&self) -> Vec<TodoId> {
        self.items
            .iter()
            .filter(|item| item.complete)
            .map(TodoItem::id)
            .collect()
    }

    /// All items in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the item with `id`
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks if an item with `id` exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// True if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next successful [`add`](Self::add) will allocate
    #[must_use]
    pub const fn next_id(&self) -> TodoId {
        self.next_id
    }

    /// Appends an item with a pre-allocated id
    ///
    /// Rejected (returning false) when the title is empty, the id is not
    /// above every id handed out so far, or the id has no successor to
    /// allocate afterwards.
    pub(crate) fn insert(&mut self, id: TodoId, title: String) -> bool {
        if title.is_empty() || id < self.next_id {
            return false;
        }
        let Some(next_id) = id.next() else {
            return false;
        };
        self.items.push(TodoItem::new(id, title));
        self.next_id = next_id;
        true
    }
}
