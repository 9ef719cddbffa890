//! Screen resolution.

use super::phase::Tab;
use crate::model::Role;
use crate::state_enum;

state_enum! {
    /// Top-level screen to render. The screens themselves live outside
    /// this crate.
    #[derive(Copy, Eq, Hash)]
    pub enum Screen {
        RoleSelection,
        PassengerSetup,
        ConductorSetup,
        LiveMap,
        ConductorDashboard,
        Schedule,
        Profile,
    }
    settled: [LiveMap, ConductorDashboard, Schedule, Profile]
}

/// Map the session variables to the screen to show. Pure; holds no state.
pub fn resolve_screen(role: Role, needs_setup: bool, tab: Tab) -> Screen {
    match role {
        Role::None => Screen::RoleSelection,
        Role::Passenger if needs_setup => Screen::PassengerSetup,
        Role::Conductor if needs_setup => Screen::ConductorSetup,
        _ => match tab {
            Tab::Home if role == Role::Passenger => Screen::LiveMap,
            Tab::Home => Screen::ConductorDashboard,
            Tab::Schedule => Screen::Schedule,
            Tab::Profile => Screen::Profile,
        },
    }
}
