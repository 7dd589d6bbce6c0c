//! Metric names and descriptions for the store.
//!
//! The store records through the `metrics` facade. Nothing is exported unless
//! the embedding application installs a recorder; without one every call is a
//! no-op.

use ::metrics::{Unit, describe_counter, describe_histogram};

// Re-export the recording macros so `metrics::counter!` resolves through this module
pub use ::metrics::{counter, histogram};

/// Actions reduced by the store, including dispatched feedback actions.
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Effects executed by the store, labelled by `type`.
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// `send` calls aborted because the dispatch limit was hit.
pub const DISPATCH_LIMIT_EXCEEDED: &str = "store.dispatch.limit_exceeded";

/// Wall time spent inside the reducer per action.
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Register descriptions for every store metric with the installed recorder.
///
/// Safe to call more than once.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Actions reduced by the store");
    describe_counter!(EFFECTS_EXECUTED, "Effects executed by the store");
    describe_counter!(
        DISPATCH_LIMIT_EXCEEDED,
        "Sends aborted after too many dispatched actions"
    );
    describe_histogram!(
        REDUCER_DURATION,
        Unit::Seconds,
        "Time spent in the reducer per action"
    );
}
