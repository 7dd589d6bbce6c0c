//! Given/When/Then harness for reducers.
//!
//! A test seeds a state, optionally replays a history of actions into it,
//! reduces one action under test and then checks the resulting state and the
//! effects that action returned. Nothing goes through a `Store`, so effects
//! are inspected as values and never executed.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todolist_core::{effect::Effect, reducer::Reducer};

/// Check run against the state left by the action under test
type StateCheck<S> = Box<dyn FnOnce(&S)>;

/// Check run against the effects returned by the action under test
type EffectCheck<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Builder for a single reducer test
///
/// # Example
///
/// ```ignore
/// use todolist_testing::{assertions, ReducerTest};
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(())
///     .given_state(TodoAppState::default())
///     .given_actions(vec![TodoAction::SubmitNewItem { text: "a".into() }])
///     .when_action(TodoAction::ToggleItem { id: TodoId::new(0) })
///     .then_state(|state| assert!(state.list.has_completed()))
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    history: Vec<A>,
    action: Option<A>,
    state_checks: Vec<StateCheck<S>>,
    effect_checks: Vec<EffectCheck<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Start a test for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            history: Vec::new(),
            action: None,
            state_checks: Vec::new(),
            effect_checks: Vec::new(),
        }
    }

    /// Environment handed to every `reduce` call
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// State before the history is replayed
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Actions reduced, in order, before the action under test
    ///
    /// Their effects are dropped. Dispatched follow-ups do not run, so list
    /// them here explicitly when the test depends on them.
    #[must_use]
    pub fn given_actions(mut self, actions: Vec<A>) -> Self {
        self.history = actions;
        self
    }

    /// The action under test
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Check the state after the action under test
    #[must_use]
    pub fn then_state<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_checks.push(Box::new(check));
        self
    }

    /// Check the effects the action under test returned
    #[must_use]
    pub fn then_effects<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_checks.push(Box::new(check));
        self
    }

    /// Replay the history, reduce the action under test, run every check
    ///
    /// # Panics
    ///
    /// Panics if the state, environment or action under test was never set,
    /// or if a check fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");
        let action = self.action.expect("Action must be set with when_action()");
        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        for past in self.history {
            let _ = self.reducer.reduce(&mut state, past, &env);
        }

        let effects = self.reducer.reduce(&mut state, action, &env);

        for check in self.state_checks {
            check(&state);
        }
        for check in self.effect_checks {
            check(&effects);
        }
    }
}

/// Checks over the effects a reducer returned
pub mod assertions {
    use todolist_core::effect::Effect;

    /// Every effect is a no-op
    ///
    /// # Panics
    ///
    /// Panics if any effect would dispatch an action.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Exactly `expected` top-level effects were returned
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// The effects dispatch exactly `expected`, in execution order
    ///
    /// Nested `Sequential` effects are flattened the way the store runs them.
    ///
    /// # Panics
    ///
    /// Panics if the dispatched actions differ from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_dispatches<A>(effects: &[Effect<A>], expected: &[A])
    where
        A: Clone + PartialEq + std::fmt::Debug,
    {
        let dispatched: Vec<A> = effects
            .iter()
            .cloned()
            .flat_map(Effect::into_actions)
            .collect();
        assert_eq!(dispatched, expected, "Unexpected dispatched actions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_core::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct Shelf {
        titles: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum ShelfAction {
        Put(String),
        Drop,
        PutTwice(String),
    }

    struct ShelfReducer;

    impl Reducer for ShelfReducer {
        type State = Shelf;
        type Action = ShelfAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Shelf,
            action: ShelfAction,
            _env: &(),
        ) -> SmallVec<[Effect<ShelfAction>; 4]> {
            match action {
                ShelfAction::Put(title) => {
                    state.titles.push(title);
                    smallvec![Effect::None]
                },
                ShelfAction::Drop => {
                    state.titles.pop();
                    SmallVec::new()
                },
                ShelfAction::PutTwice(title) => smallvec![Effect::chain(vec![
                    Effect::dispatch(ShelfAction::Put(title.clone())),
                    Effect::dispatch(ShelfAction::Put(title)),
                ])],
            }
        }
    }

    fn put(title: &str) -> ShelfAction {
        ShelfAction::Put(title.to_string())
    }

    #[test]
    fn test_action_under_test_updates_state() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(Shelf::default())
            .when_action(put("a"))
            .then_state(|state| assert_eq!(state.titles, vec!["a"]))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_history_is_replayed_in_order() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(Shelf::default())
            .given_actions(vec![put("a"), put("b"), put("c")])
            .when_action(ShelfAction::Drop)
            .then_state(|state| assert_eq!(state.titles, vec!["a", "b"]))
            .run();
    }

    #[test]
    fn test_history_effects_are_dropped() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(Shelf::default())
            .given_actions(vec![ShelfAction::PutTwice("x".to_string())])
            .when_action(ShelfAction::PutTwice("y".to_string()))
            .then_state(|state| assert!(state.titles.is_empty()))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_dispatches(effects, &[put("y"), put("y")]);
            })
            .run();
    }

    #[test]
    fn test_no_effects_accepts_empty_and_none() {
        assertions::assert_no_effects::<ShelfAction>(&[Effect::None]);
        assertions::assert_no_effects::<ShelfAction>(&[]);
        assertions::assert_no_effects::<ShelfAction>(&[Effect::chain(vec![])]);
    }

    #[test]
    #[should_panic(expected = "Expected no effects")]
    fn test_no_effects_rejects_dispatch() {
        assertions::assert_no_effects(&[Effect::dispatch(ShelfAction::Drop)]);
    }
}
