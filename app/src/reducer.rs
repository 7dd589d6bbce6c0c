//! Reducer logic for the to-do list.
//!
//! Commands are the intents a presentation layer forwards. Each command is
//! decided against the current state: it either yields an event, which is
//! then applied, or nothing, in which case the command was a no-op. Events
//! can also be sent directly (replay) and are applied the same way.

use crate::types::{TodoId, TodoListState};
use serde::{Deserialize, Serialize};
use todolist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use todolist_macros::Action;

/// Application state: the list plus the text currently being typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoAppState {
    /// The to-do list
    pub list: TodoListState,
    /// Contents of the new-item input
    pub draft: String,
}

/// Actions representing commands and events for the to-do list
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Add an item titled `text`
    #[command]
    SubmitNewItem {
        /// Title of the new item
        text: String,
    },

    /// Command: Flip an item's completion
    #[command]
    ToggleItem {
        /// Item to toggle
        id: TodoId,
    },

    /// Command: Delete an item
    #[command]
    RemoveItem {
        /// Item to delete
        id: TodoId,
    },

    /// Command: Delete every completed item
    #[command]
    ClearCompleted,

    /// Command: Replace the contents of the new-item input
    #[command]
    EditDraft {
        /// New input contents
        text: String,
    },

    /// Command: Submit the new-item input and clear it
    #[command]
    SubmitDraft,

    // ========== Events ==========
    /// Event: An item was appended
    #[event]
    ItemAdded {
        /// Allocated id
        id: TodoId,
        /// Item title
        title: String,
    },

    /// Event: An item's completion changed
    #[event]
    ItemToggled {
        /// Item identifier
        id: TodoId,
        /// Completion after the change
        complete: bool,
    },

    /// Event: An item was deleted
    #[event]
    ItemRemoved {
        /// Item identifier
        id: TodoId,
    },

    /// Event: Completed items were deleted
    #[event]
    CompletedCleared {
        /// Ids that were removed, in list order
        removed: Vec<TodoId>,
    },
}

/// Reducer for the to-do list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decides which event, if any, a command produces
    ///
    /// `None` means the command would change nothing.
    fn decide(list: &TodoListState, command: TodoAction) -> Option<TodoAction> {
        match command {
            TodoAction::SubmitNewItem { text } => (!text.is_empty()).then(|| TodoAction::ItemAdded {
                id: list.next_id(),
                title: text,
            }),
            TodoAction::ToggleItem { id } => list.get(id).map(|item| TodoAction::ItemToggled {
                id,
                complete: !item.is_complete(),
            }),
            TodoAction::RemoveItem { id } => {
                list.contains(id).then_some(TodoAction::ItemRemoved { id })
            },
            TodoAction::ClearCompleted => {
                let removed = list.completed_ids();
                (!removed.is_empty()).then_some(TodoAction::CompletedCleared { removed })
            },
            // Input edits and events never produce an event of their own
            TodoAction::EditDraft { .. }
            | TodoAction::SubmitDraft
            | TodoAction::ItemAdded { .. }
            | TodoAction::ItemToggled { .. }
            | TodoAction::ItemRemoved { .. }
            | TodoAction::CompletedCleared { .. } => None,
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut TodoAppState, event: TodoAction) {
        match event {
            TodoAction::ItemAdded { id, title } => {
                if !state.list.insert(id, title) {
                    tracing::debug!(%id, "Ignoring ItemAdded with empty title, stale id or last id");
                }
            },
            TodoAction::ItemToggled { id, complete } => {
                state.list.set_complete(id, complete);
            },
            TodoAction::ItemRemoved { id } => {
                state.list.remove(id);
            },
            TodoAction::CompletedCleared { removed } => {
                for id in removed {
                    state.list.remove(id);
                }
            },
            // Commands are not applied to state
            TodoAction::SubmitNewItem { .. }
            | TodoAction::ToggleItem { .. }
            | TodoAction::RemoveItem { .. }
            | TodoAction::ClearCompleted
            | TodoAction::EditDraft { .. }
            | TodoAction::SubmitDraft => {},
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoAppState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let name = action.name();
        match action {
            // ========== Input ==========
            TodoAction::EditDraft { text } => {
                state.draft = text;
                SmallVec::new()
            },

            TodoAction::SubmitDraft => {
                // The input is cleared whether or not the submission is accepted
                let text = std::mem::take(&mut state.draft);
                smallvec![Effect::dispatch(TodoAction::SubmitNewItem { text })]
            },

            // ========== Commands ==========
            TodoAction::SubmitNewItem { .. }
            | TodoAction::ToggleItem { .. }
            | TodoAction::RemoveItem { .. }
            | TodoAction::ClearCompleted => {
                match Self::decide(&state.list, action) {
                    Some(event) => {
                        tracing::debug!(command = name, event = event.name(), "Command accepted");
                        Self::apply_event(state, event);
                    },
                    None => tracing::debug!(command = name, "Command ignored, nothing to change"),
                }
                SmallVec::new()
            },

            // ========== Events ==========
            event => {
                tracing::trace!(event = name, "Applying event");
                Self::apply_event(state, event);
                SmallVec::new()
            },
        }
    }
}
