//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a user action is
//! allowed from the current session state. The transition table attaches
//! one guard to every action.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are cheap to clone; the predicate is shared behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use trackit_session::core::Guard;
/// use trackit_session::routing::Phase;
///
/// let only_active = Guard::new(|p: &Phase| matches!(p, Phase::Active));
///
/// assert!(only_active.check(&Phase::Active));
/// assert!(!only_active.check(&Phase::SettingUp));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that never blocks.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Combine two guards; both must pass.
    pub fn and(self, other: Guard<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| self.check(s) && other.check(s))
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
