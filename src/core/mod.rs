//! Core reducer types and logic.
//!
//! This module contains the pure functional core shared by every state
//! container in the crate:
//! - State and action definitions via the `State` and `Action` traits
//! - Reducers as pure transition functions
//! - Injectable clocks, so reducers stay deterministic
//! - The single-owner `Store` that applies actions in order

mod clock;
mod reducer;
mod state;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use reducer::{Hydrate, Reducer};
pub use state::{Action, State};
pub use store::Store;
