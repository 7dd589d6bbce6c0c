//! # Todolist Runtime
//!
//! The Store runtime that coordinates reducer execution and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer and executes effects
//! - **Effect execution**: Dispatched actions are fed back to the reducer
//! - **Listeners**: Callbacks that observe state after each `send`
//!
//! Everything runs on the caller's thread. `send` returns once the action and
//! every action it dispatched have been reduced.
//!
//! ## Example
//!
//! ```ignore
//! use todolist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! store.subscribe(|state| render(state));
//! store.send(Action::DoSomething)?;
//!
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use todolist_core::{effect::Effect, reducer::Reducer};

/// Metric names and descriptions
pub mod metrics;

pub use error::StoreError;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` reduced more actions than the configured limit
        ///
        /// State changes made before the limit was hit are kept; the remaining
        /// queued actions are dropped.
        #[error("Dispatch limit of {limit} actions exceeded in a single send")]
        DispatchLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

/// Configuration for Store behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of actions one `send` may reduce, counting the action
    /// itself and every action dispatched from its effects
    pub max_actions_per_send: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_actions_per_send: usize) -> Self {
        Self {
            max_actions_per_send,
        }
    }

    /// Set the per-send action limit
    #[must_use]
    pub const fn with_max_actions_per_send(mut self, limit: usize) -> Self {
        self.max_actions_per_send = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_actions_per_send: 64,
        }
    }
}

/// Callback invoked with the current state after every processed `send`
type Listener<S> = Box<dyn FnMut(&S)>;

/// The Store - runtime for reducers
///
/// The Store is an explicitly owned value. Whoever drives the UI loop holds
/// it and passes it by reference; there is no global instance.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
    config: StoreConfig,
    listeners: Vec<Listener<S>>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Uses [`StoreConfig::default`].
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with a custom configuration
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            config,
            listeners: Vec::new(),
        }
    }

    /// The store's configuration
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Register a listener that observes state after every `send`
    ///
    /// Listeners run in registration order, once per `send`, after the action
    /// and all actions it dispatched have been reduced.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&S) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Send an action to the store
    ///
    /// Reduces `action`, then executes its effects. Actions dispatched by
    /// effects are queued and reduced in FIFO order until the queue drains.
    ///
    /// # Returns
    ///
    /// The number of actions reduced (at least 1).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DispatchLimitExceeded`] when more than
    /// `max_actions_per_send` actions would be reduced. Listeners are still
    /// notified of the state reached so far.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: A) -> Result<usize, StoreError> {
        let limit = self.config.max_actions_per_send;
        let mut queue = VecDeque::from([action]);
        let mut processed = 0;

        while let Some(action) = queue.pop_front() {
            if processed >= limit {
                tracing::warn!(limit, dropped = queue.len() + 1, "Dispatch limit exceeded");
                metrics::counter!(metrics::DISPATCH_LIMIT_EXCEEDED).increment(1);
                self.notify();
                return Err(StoreError::DispatchLimitExceeded { limit });
            }

            let effects = {
                let span = tracing::debug_span!("reducer_execution", seq = processed);
                let _enter = span.enter();

                let start = Instant::now();
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                metrics::histogram!(metrics::REDUCER_DURATION)
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };
            processed += 1;
            metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

            for effect in effects {
                Self::execute_effect(effect, &mut queue);
            }
        }

        tracing::debug!(processed, "Action processing completed");
        self.notify();
        Ok(processed)
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.items.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// Consume the store and return its state
    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }

    fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
                metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "none").increment(1);
            },
            Effect::Dispatch(action) => {
                tracing::trace!("Executing Effect::Dispatch");
                metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "dispatch").increment(1);
                queue.push_back(*action);
            },
            Effect::Sequential(effects) => {
                tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                metrics::counter!(metrics::EFFECTS_EXECUTED, "type" => "sequential").increment(1);
                for effect in effects {
                    Self::execute_effect(effect, queue);
                }
            },
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
