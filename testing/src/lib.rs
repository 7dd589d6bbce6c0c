//! # Todolist Testing
//!
//! Testing utilities and helpers for the todolist reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Effect assertion helpers
//! - [`properties`]: proptest strategies for text input and ids
//!
//! ## Example
//!
//! ```ignore
//! use todolist_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoAppState::default())
//!     .when_action(TodoAction::SubmitNewItem { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.list.count(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

/// Given-When-Then harness for reducers
pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Property-based testing utilities
///
/// Strategies for the kinds of input a presentation layer forwards into a
/// reducer: free text (possibly empty) and small integer ids.
pub mod properties {
    use proptest::prelude::*;

    /// Text that is never empty
    pub fn non_empty_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{1,24}"
    }

    /// Text that may be empty, roughly one time in four
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(String::new()),
            3 => non_empty_text(),
        ]
    }

    /// Ids drawn from `0..upper`
    pub fn id_below(upper: u64) -> impl Strategy<Value = u64> {
        0..upper.max(1)
    }
}
