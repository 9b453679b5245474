//! Single-owner state container that runs actions through a reducer.

use super::reducer::Reducer;
use super::state::{Action, State};
use tracing::debug;

/// Holds the current state of a reducer.
///
/// Dispatch takes `&mut self`, so there is exactly one writer at a time.
/// Consumers receive the store explicitly instead of reaching for a global.
pub struct Store<R: Reducer> {
    reducer: R,
    current: R::State,
    dispatched: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store in the reducer's initial state
    pub fn new(reducer: R) -> Self {
        let current = reducer.initial();
        Self::with_state(reducer, current)
    }

    /// Create a store starting from an explicit state
    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self {
            reducer,
            current: state,
            dispatched: 0,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &R::State {
        &self.current
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Run `action` through the reducer and make the result current.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        let action_name = action.name().to_string();
        let next = self.reducer.reduce(&self.current, action);
        debug!(
            action = %action_name,
            from = self.current.name(),
            to = next.name(),
            "dispatched"
        );
        self.current = next;
        self.dispatched += 1;
        &self.current
    }

    pub fn into_state(self) -> R::State {
        self.current
    }
}
