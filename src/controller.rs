//! Session controller.
//!
//! The imperative shell around the pure routing machine. It owns the one
//! `SessionState`, runs the persistence load behind an initialization gate,
//! performs the storage effect of each accepted transition and records
//! phase changes.
//!
//! Storage write failures never abort a transition. The new state is kept
//! in memory, a warning is logged and [`SessionController::is_durable`]
//! turns false until a later write succeeds.

use crate::config::SessionConfig;
use crate::core::{StateHistory, StateTransition};
use crate::model::Role;
use crate::persistence::{KeyValueStore, PersistencePolicy};
use crate::routing::{
    guard_for, transition, Action, ActionKind, Phase, Screen, SessionState, StorageEffect, Tab,
    TransitionError,
};
use crate::validation::{
    validate_conductor, validate_passenger, ConductorForm, PassengerForm, SetupRejection,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Session not initialized; call initialize() first")]
    NotInitialized,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Setup rejected: {0}")]
    SetupRejected(SetupRejection),
}

pub struct SessionController<K: KeyValueStore> {
    policy: PersistencePolicy<K>,
    state: Option<SessionState>,
    history: StateHistory<Phase>,
    setup_error: Option<SetupRejection>,
    durable: bool,
}

impl<K: KeyValueStore> SessionController<K> {
    pub fn new(store: K, config: &SessionConfig) -> Self {
        Self {
            policy: PersistencePolicy::new(store, config),
            state: None,
            history: StateHistory::new(),
            setup_error: None,
            durable: true,
        }
    }

    pub fn with_defaults(store: K) -> Self {
        Self::new(store, &SessionConfig::default())
    }

    pub fn initialize(&mut self) -> Screen {
        self.initialize_at(Utc::now())
    }

    /// Load the stored session once. Later calls return the current screen
    /// without touching storage.
    pub fn initialize_at(&mut self, now: DateTime<Utc>) -> Screen {
        if let Some(state) = &self.state {
            return state.screen();
        }

        let initial = self.policy.load_at(now);
        let outcome = initial.outcome;
        let state = SessionState::from(initial);
        let phase = state.phase();
        info!(role = %state.role(), %phase, ?outcome, "session initialized");

        if phase != Phase::Unauthenticated {
            self.history = self.history.record(StateTransition {
                from: Phase::Unauthenticated,
                to: phase,
                trigger: "load".to_string(),
                timestamp: now,
            });
        }

        let screen = state.screen();
        self.state = Some(state);
        screen
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Screen to render; `None` until initialized.
    pub fn screen(&self) -> Option<Screen> {
        self.state.as_ref().map(SessionState::screen)
    }

    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(SessionState::phase)
    }

    /// Message from the last rejected setup submission, cleared by the
    /// next accepted transition.
    pub fn setup_error(&self) -> Option<&SetupRejection> {
        self.setup_error.as_ref()
    }

    /// Phase changes since start, including the initial load.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// False after a storage write failed.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    pub fn policy(&self) -> &PersistencePolicy<K> {
        &self.policy
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Screen, ControllerError> {
        self.dispatch_at(action, Utc::now())
    }

    /// Apply one action as of `now`.
    pub fn dispatch_at(
        &mut self,
        action: Action,
        now: DateTime<Utc>,
    ) -> Result<Screen, ControllerError> {
        let current = self.state.as_ref().ok_or(ControllerError::NotInitialized)?;
        let kind = action.kind();
        let from = current.phase();

        let step = match transition(current, action, now) {
            Ok(step) => step,
            Err(e) => {
                debug!(action = %kind, phase = %from, error = %e, "action refused");
                return Err(e.into());
            }
        };

        self.apply_effect(step.effect);

        let to = step.state.phase();
        if from != to {
            self.history = self.history.record(StateTransition {
                from,
                to,
                trigger: kind.to_string(),
                timestamp: now,
            });
        }
        info!(action = %kind, %from, %to, "session transition");

        self.setup_error = None;
        let screen = step.state.screen();
        self.state = Some(step.state);
        Ok(screen)
    }

    pub fn select_role(&mut self, role: Role) -> Result<Screen, ControllerError> {
        self.dispatch(Action::SelectRole(role))
    }

    /// Validate and submit the passenger form. A rejection keeps the
    /// machine in setup and is remembered for display.
    pub fn submit_passenger_setup(&mut self, form: &PassengerForm) -> Result<Screen, ControllerError> {
        self.ensure_permitted(ActionKind::CompletePassengerSetup)?;
        match validate_passenger(form) {
            Ok(setup) => self.dispatch(Action::CompletePassengerSetup(setup)),
            Err(rejection) => Err(self.reject(rejection)),
        }
    }

    pub fn submit_conductor_setup(&mut self, form: &ConductorForm) -> Result<Screen, ControllerError> {
        self.ensure_permitted(ActionKind::CompleteConductorSetup)?;
        match validate_conductor(form) {
            Ok(setup) => self.dispatch(Action::CompleteConductorSetup(setup)),
            Err(rejection) => Err(self.reject(rejection)),
        }
    }

    pub fn end_shift(&mut self) -> Result<Screen, ControllerError> {
        self.dispatch(Action::EndShift)
    }

    pub fn logout(&mut self) -> Result<Screen, ControllerError> {
        self.dispatch(Action::Logout)
    }

    pub fn change_tab(&mut self, tab: Tab) -> Result<Screen, ControllerError> {
        self.dispatch(Action::ChangeTab(tab))
    }

    fn ensure_permitted(&self, kind: ActionKind) -> Result<(), ControllerError> {
        let state = self.state.as_ref().ok_or(ControllerError::NotInitialized)?;
        if guard_for(kind).check(state) {
            Ok(())
        } else {
            Err(TransitionError::NotPermitted {
                action: kind,
                phase: state.phase(),
            }
            .into())
        }
    }

    fn reject(&mut self, rejection: SetupRejection) -> ControllerError {
        debug!(errors = rejection.errors().len(), message = %rejection, "setup rejected");
        self.setup_error = Some(rejection.clone());
        ControllerError::SetupRejected(rejection)
    }

    fn apply_effect(&mut self, effect: StorageEffect) {
        let result = match effect {
            StorageEffect::None => return,
            StorageEffect::Persist(record) => self.policy.save(record),
            StorageEffect::Clear => self.policy.clear(),
        };

        match result {
            Ok(()) => self.durable = true,
            Err(e) => {
                warn!(error = %e, "session storage write failed, continuing in memory");
                self.durable = false;
            }
        }
    }
}
