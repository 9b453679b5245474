//! Reducers: pure state-transition functions.

use super::state::{Action, State};

/// Pure state-transition function.
///
/// `reduce` must be total and free of side effects other than reading
/// whatever the reducer was constructed with (clocks, id generators).
///
/// # Example
///
/// ```rust
/// use storefront::core::{Action, Reducer, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Count(u32);
///
/// impl State for Count {
///     fn name(&self) -> &str { "Count" }
/// }
///
/// #[derive(Debug)]
/// enum CountAction { Increment, Reset }
///
/// impl Action for CountAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Increment => "increment",
///             Self::Reset => "reset",
///         }
///     }
/// }
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = Count;
///     type Action = CountAction;
///
///     fn initial(&self) -> Count { Count(0) }
///
///     fn reduce(&self, state: &Count, action: CountAction) -> Count {
///         match action {
///             CountAction::Increment => Count(state.0 + 1),
///             CountAction::Reset => Count(0),
///         }
///     }
/// }
///
/// let next = Counter.reduce(&Counter.initial(), CountAction::Increment);
/// assert_eq!(next, Count(1));
/// ```
pub trait Reducer {
    type State: State;
    type Action: Action;

    /// State a fresh container starts from.
    fn initial(&self) -> Self::State;

    /// Produce the next state. The current state is left untouched.
    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
}

/// Reducers whose whole state can be replaced by a stored snapshot.
pub trait Hydrate: Reducer {
    /// Action that replaces the current state with `snapshot`.
    fn hydrate(snapshot: Self::State) -> Self::Action;
}
