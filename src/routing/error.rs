//! Transition errors.

use super::phase::Phase;
use super::transition::ActionKind;
use crate::model::Role;
use thiserror::Error;

/// Why an action was refused. The state is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Action '{action}' is not permitted in phase '{phase}'")]
    NotPermitted { action: ActionKind, phase: Phase },

    #[error("Role {0} cannot be selected")]
    InvalidRole(Role),
}
