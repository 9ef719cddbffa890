//! Core state machine types and logic.
//!
//! This module contains the pure building blocks shared by the routing
//! machine:
//! - State definitions via the `State` trait
//! - Guard predicates for transition preconditions
//! - Immutable history tracking
//!
//! Nothing in this module touches storage or the clock on its own.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
