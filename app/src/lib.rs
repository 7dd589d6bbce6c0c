//! A single to-do list built on the todolist reducer architecture.
//!
//! The list itself is [`TodoListState`]: add an item, toggle it, remove it,
//! clear the completed ones, and read the count. A presentation layer drives
//! it through a [`Store`](todolist_runtime::Store) by sending [`TodoAction`]
//! commands and re-rendering a [`TodoView`] afterwards.
//!
//! # Quick Start
//!
//! ```
//! use todolist::{TodoAction, TodoAppState, TodoId, TodoReducer, TodoView};
//! use todolist_runtime::Store;
//!
//! # fn main() -> Result<(), todolist_runtime::StoreError> {
//! let mut store = Store::new(TodoAppState::default(), TodoReducer::new(), ());
//!
//! store.send(TodoAction::SubmitNewItem { text: "Buy milk".to_string() })?;
//! store.send(TodoAction::ToggleItem { id: TodoId::new(0) })?;
//!
//! let view = store.state(|s| TodoView::new("Chores", s));
//! assert_eq!(view.count, 1);
//! assert!(view.has_completed);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use command::{CommandError, Input, parse_line};
pub use config::{AppConfig, ConfigError, RenderMode};
pub use reducer::{TodoAction, TodoAppState, TodoReducer};
pub use types::{TodoId, TodoItem, TodoListState};
pub use view::TodoView;
