//! Screen routing state machine.
//!
//! The machine has three phases:
//!
//! ```text
//! Unauthenticated --select_role--> SettingUp --complete_*_setup--> Active
//!        ^                            ^                              |
//!        |                            +-------- end_shift -----------+
//!        +------------------ logout (from anywhere) -----------------+
//! ```
//!
//! `Active` carries the selected tab as a sub-state. Screen resolution is
//! a pure view over the session state and is recomputed after every
//! transition.

mod error;
mod phase;
mod screen;
mod state;
mod transition;

pub use error::TransitionError;
pub use phase::{Phase, Tab};
pub use screen::{resolve_screen, Screen};
pub use state::SessionState;
pub use transition::{
    available_actions, guard_for, transition, Action, ActionKind, StorageEffect, Step,
};
