//! Core `State` and `Action` traits for reducer-driven state containers.
//!
//! States are immutable values. Reducers never mutate a state in place, they
//! produce the next one from the current one and an action.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for reducer states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: the store hands out the previous state while building the next
/// - `PartialEq`: states must be comparable in tests and change detection
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use storefront::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     value: u32,
///     failed: bool,
/// }
///
/// impl State for Counter {
///     fn name(&self) -> &str {
///         if self.value == 0 { "Zero" } else { "Counting" }
///     }
///
///     fn is_error(&self) -> bool {
///         self.failed
///     }
/// }
///
/// let counter = Counter { value: 0, failed: false };
/// assert_eq!(counter.name(), "Zero");
/// assert!(!counter.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short label describing the condition the state is in, for logging.
    fn name(&self) -> &str;

    /// Check if this state carries an error condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Trait for actions dispatched to a reducer.
pub trait Action: Debug + Send {
    /// Action name for display/logging.
    fn name(&self) -> &str;
}
