//! Transition table for user actions.
//!
//! `transition` is pure: it takes the current state and an action and
//! returns the next state plus the storage effect the caller must perform.
//! Each action kind has one guard; an action whose guard fails is refused
//! and nothing changes.

use super::error::TransitionError;
use super::phase::{Phase, Tab};
use super::state::SessionState;
use crate::core::Guard;
use crate::model::{Role, SessionRecord};
use crate::validation::{ConductorSetup, PassengerSetup};
use chrono::{DateTime, Utc};
use std::fmt;

/// A user action.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectRole(Role),
    CompletePassengerSetup(PassengerSetup),
    CompleteConductorSetup(ConductorSetup),
    EndShift,
    /// Also used for "back" from a setup screen.
    Logout,
    ChangeTab(Tab),
}

/// Payload-free discriminant of [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SelectRole,
    CompletePassengerSetup,
    CompleteConductorSetup,
    EndShift,
    Logout,
    ChangeTab,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::SelectRole,
        ActionKind::CompletePassengerSetup,
        ActionKind::CompleteConductorSetup,
        ActionKind::EndShift,
        ActionKind::Logout,
        ActionKind::ChangeTab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::SelectRole => "select_role",
            ActionKind::CompletePassengerSetup => "complete_passenger_setup",
            ActionKind::CompleteConductorSetup => "complete_conductor_setup",
            ActionKind::EndShift => "end_shift",
            ActionKind::Logout => "logout",
            ActionKind::ChangeTab => "change_tab",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SelectRole(_) => ActionKind::SelectRole,
            Action::CompletePassengerSetup(_) => ActionKind::CompletePassengerSetup,
            Action::CompleteConductorSetup(_) => ActionKind::CompleteConductorSetup,
            Action::EndShift => ActionKind::EndShift,
            Action::Logout => ActionKind::Logout,
            Action::ChangeTab(_) => ActionKind::ChangeTab,
        }
    }
}

/// What the caller must do to storage after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageEffect {
    None,
    Persist(SessionRecord),
    Clear,
}

/// Accepted transition: the next state and its storage effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: SessionState,
    pub effect: StorageEffect,
}

/// Precondition for an action kind.
pub fn guard_for(kind: ActionKind) -> Guard<SessionState> {
    match kind {
        ActionKind::SelectRole => Guard::new(|s: &SessionState| s.phase() == Phase::Unauthenticated),
        ActionKind::CompletePassengerSetup => Guard::new(|s: &SessionState| {
            s.phase() == Phase::SettingUp && s.role() == Role::Passenger
        }),
        ActionKind::CompleteConductorSetup => Guard::new(|s: &SessionState| {
            s.phase() == Phase::SettingUp && s.role() == Role::Conductor
        }),
        ActionKind::EndShift => Guard::new(|s: &SessionState| {
            s.phase() == Phase::Active && s.role() == Role::Conductor
        }),
        ActionKind::Logout => Guard::always(),
        ActionKind::ChangeTab => Guard::new(|s: &SessionState| s.phase() == Phase::Active),
    }
}

/// Action kinds whose guard passes in `state`.
pub fn available_actions(state: &SessionState) -> Vec<ActionKind> {
    ActionKind::ALL
        .into_iter()
        .filter(|kind| guard_for(*kind).check(state))
        .collect()
}

/// Apply `action` to `state`. `now` stamps any record to persist.
pub fn transition(
    state: &SessionState,
    action: Action,
    now: DateTime<Utc>,
) -> Result<Step, TransitionError> {
    let kind = action.kind();
    if !guard_for(kind).check(state) {
        return Err(TransitionError::NotPermitted {
            action: kind,
            phase: state.phase(),
        });
    }

    let step = match action {
        Action::SelectRole(Role::None) => return Err(TransitionError::InvalidRole(Role::None)),
        Action::SelectRole(role) => Step {
            state: SessionState {
                role,
                needs_setup: true,
                ..state.clone()
            },
            effect: StorageEffect::None,
        },
        Action::CompletePassengerSetup(setup) => {
            let (profile, contact) = setup.into_parts();
            let record = SessionRecord::passenger(profile.clone(), Some(contact.clone()), now);
            Step {
                state: SessionState {
                    role: Role::Passenger,
                    needs_setup: false,
                    profile: Some(profile),
                    emergency_contact: Some(contact),
                    active_tab: Tab::Home,
                },
                effect: StorageEffect::Persist(record),
            }
        }
        Action::CompleteConductorSetup(setup) => {
            let profile = setup.into_profile();
            let record = SessionRecord::conductor(profile.clone(), now);
            Step {
                state: SessionState {
                    role: Role::Conductor,
                    needs_setup: false,
                    profile: Some(profile),
                    emergency_contact: None,
                    active_tab: Tab::Home,
                },
                effect: StorageEffect::Persist(record),
            }
        }
        Action::EndShift => Step {
            state: SessionState {
                needs_setup: true,
                profile: None,
                ..state.clone()
            },
            effect: StorageEffect::Clear,
        },
        Action::Logout => Step {
            state: SessionState::default(),
            effect: StorageEffect::Clear,
        },
        Action::ChangeTab(tab) => Step {
            state: SessionState {
                active_tab: tab,
                ..state.clone()
            },
            effect: StorageEffect::None,
        },
    };

    Ok(step)
}
