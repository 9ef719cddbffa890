//! The in-memory session state the routing machine operates on.

use super::phase::{Phase, Tab};
use super::screen::{resolve_screen, Screen};
use crate::core::State;
use crate::model::{EmergencyContact, Profile, Role};
use crate::persistence::InitialState;
use serde::{Deserialize, Serialize};

/// The four variables that decide what the user sees, plus the contact.
///
/// Fields are only changed through the transition function, which
/// keeps a profile present whenever the phase is `Active`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub(crate) role: Role,
    pub(crate) needs_setup: bool,
    pub(crate) profile: Option<Profile>,
    pub(crate) emergency_contact: Option<EmergencyContact>,
    pub(crate) active_tab: Tab,
}

impl SessionState {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn needs_setup(&self) -> bool {
        self.needs_setup
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn emergency_contact(&self) -> Option<&EmergencyContact> {
        self.emergency_contact.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.role, self.needs_setup)
    }

    pub fn screen(&self) -> Screen {
        resolve_screen(self.role, self.needs_setup, self.active_tab)
    }
}

impl From<InitialState> for SessionState {
    fn from(initial: InitialState) -> Self {
        Self {
            role: initial.role,
            needs_setup: initial.needs_setup,
            profile: initial.profile,
            emergency_contact: initial.emergency_contact,
            active_tab: Tab::Home,
        }
    }
}

impl State for SessionState {
    fn name(&self) -> &str {
        self.phase().as_str()
    }

    fn is_settled(&self) -> bool {
        self.phase().is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::LoadOutcome;

    #[test]
    fn default_state_is_unauthenticated_on_role_selection() {
        let state = SessionState::default();

        assert_eq!(state.phase(), Phase::Unauthenticated);
        assert_eq!(state.screen(), Screen::RoleSelection);
        assert_eq!(state.name(), "Unauthenticated");
        assert!(!state.is_settled());
    }

    #[test]
    fn restored_initial_state_starts_on_home() {
        let profile = Profile {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            ..Profile::default()
        };
        let state = SessionState::from(InitialState {
            role: Role::Passenger,
            needs_setup: false,
            profile: Some(profile.clone()),
            emergency_contact: None,
            outcome: LoadOutcome::Restored,
        });

        assert_eq!(state.active_tab(), Tab::Home);
        assert_eq!(state.screen(), Screen::LiveMap);
        assert_eq!(state.profile(), Some(&profile));
        assert!(state.is_settled());
    }

    #[test]
    fn expired_conductor_lands_on_conductor_setup() {
        let state = SessionState::from(InitialState {
            role: Role::Conductor,
            needs_setup: true,
            profile: None,
            emergency_contact: None,
            outcome: LoadOutcome::Expired,
        });

        assert_eq!(state.phase(), Phase::SettingUp);
        assert_eq!(state.screen(), Screen::ConductorSetup);
    }
}
