//! Top-level machine phase and navigation tabs.

use crate::model::Role;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

state_enum! {
    /// Where the user is in the session lifecycle.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// No role chosen.
        Unauthenticated,
        /// Role chosen, setup form not yet completed.
        SettingUp,
        /// Profile complete; the tab bar is shown.
        Active,
    }
    settled: [Active]
}

impl Phase {
    /// Derive the phase from the two flags that define it.
    pub fn of(role: Role, needs_setup: bool) -> Self {
        match (role, needs_setup) {
            (Role::None, _) => Phase::Unauthenticated,
            (_, true) => Phase::SettingUp,
            (_, false) => Phase::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Unauthenticated => "Unauthenticated",
            Phase::SettingUp => "SettingUp",
            Phase::Active => "Active",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bottom navigation tab, meaningful only while `Active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tab {
    #[default]
    Home,
    Schedule,
    Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn none_role_is_always_unauthenticated() {
        assert_eq!(Phase::of(Role::None, false), Phase::Unauthenticated);
        assert_eq!(Phase::of(Role::None, true), Phase::Unauthenticated);
    }

    #[test]
    fn setup_flag_splits_setting_up_from_active() {
        assert_eq!(Phase::of(Role::Passenger, true), Phase::SettingUp);
        assert_eq!(Phase::of(Role::Conductor, true), Phase::SettingUp);
        assert_eq!(Phase::of(Role::Passenger, false), Phase::Active);
        assert_eq!(Phase::of(Role::Conductor, false), Phase::Active);
    }

    #[test]
    fn only_active_is_settled() {
        assert!(!Phase::Unauthenticated.is_settled());
        assert!(!Phase::SettingUp.is_settled());
        assert!(Phase::Active.is_settled());
    }

    #[test]
    fn macro_name_agrees_with_as_str() {
        for phase in [Phase::Unauthenticated, Phase::SettingUp, Phase::Active] {
            assert_eq!(phase.name(), phase.as_str());
        }
    }

    #[test]
    fn default_tab_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
        assert_eq!(serde_json::to_string(&Tab::Schedule).unwrap(), "\"SCHEDULE\"");
    }
}
