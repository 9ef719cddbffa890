//! End-to-end session scenarios across simulated process restarts.

use chrono::{Duration, Utc};
use tempfile::TempDir;
use trackit_session::{
    ConductorForm, ControllerError, FileStore, KeyValueStore, LoadOutcome, MemoryStore,
    PassengerForm, PersistencePolicy, Phase, Role, Screen, SessionConfig, SessionController, Tab,
    ValidationError,
};

const KEY: &str = "trackit_user_data";

fn conductor_form() -> ConductorForm {
    ConductorForm {
        name: "A".to_string(),
        phone: "9999999999".to_string(),
        route: "11".to_string(),
        ..ConductorForm::default()
    }
}

fn passenger_form() -> PassengerForm {
    PassengerForm {
        name: "Asha".to_string(),
        phone: "9876543210".to_string(),
        theme_color: Some("#FFD100".to_string()),
        contact_name: "Mum".to_string(),
        contact_phone: "9000000000".to_string(),
        contact_email: "mum@example.com".to_string(),
        ..PassengerForm::default()
    }
}

#[test]
fn conductor_setup_survives_restart() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_defaults(store.clone());
    session.initialize();

    session.select_role(Role::Conductor).unwrap();
    session.submit_conductor_setup(&conductor_form()).unwrap();

    let mut restarted = SessionController::with_defaults(store);
    assert_eq!(restarted.initialize(), Screen::ConductorDashboard);

    let state = restarted.state().unwrap();
    assert_eq!(state.role(), Role::Conductor);
    assert!(!state.needs_setup());
    assert_eq!(
        state.profile().unwrap().assigned_route.as_deref(),
        Some("11")
    );
}

#[test]
fn passenger_setup_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();

    let mut session = SessionController::with_defaults(FileStore::new(dir.path()));
    session.initialize();
    session.select_role(Role::Passenger).unwrap();
    assert_eq!(
        session.submit_passenger_setup(&passenger_form()).unwrap(),
        Screen::LiveMap
    );

    let mut restarted = SessionController::with_defaults(FileStore::new(dir.path()));
    assert_eq!(restarted.initialize(), Screen::LiveMap);

    let state = restarted.state().unwrap();
    assert_eq!(state.profile().unwrap().name, "Asha");
    assert_eq!(state.emergency_contact().unwrap().email, "mum@example.com");
}

#[test]
fn expired_conductor_is_sent_back_to_setup() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_defaults(store.clone());
    session.initialize();
    session.select_role(Role::Conductor).unwrap();
    session.submit_conductor_setup(&conductor_form()).unwrap();

    let tomorrow = Utc::now() + Duration::hours(24) + Duration::minutes(1);
    let mut restarted = SessionController::with_defaults(store);

    assert_eq!(restarted.initialize_at(tomorrow), Screen::ConductorSetup);
    let state = restarted.state().unwrap();
    assert_eq!(state.role(), Role::Conductor);
    assert!(state.profile().is_none());

    let history = restarted.history();
    assert_eq!(history.transitions().len(), 1);
    assert_eq!(history.transitions()[0].to, Phase::SettingUp);
    assert_eq!(history.transitions()[0].trigger, "load");
}

#[test]
fn truncated_record_resets_and_empties_store() {
    let store = MemoryStore::with_entry(KEY, r#"{"role":"PASSENGER","profile":{"na"#);

    let initial = PersistencePolicy::with_defaults(store.clone()).load();
    assert_eq!(initial.role, Role::None);
    assert!(!initial.needs_setup);
    assert_eq!(initial.outcome, LoadOutcome::Corrupt);
    assert!(store.get(KEY).unwrap().is_none());

    let mut session = SessionController::with_defaults(store);
    assert_eq!(session.initialize(), Screen::RoleSelection);
}

#[test]
fn short_phone_never_reaches_the_machine() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_defaults(store.clone());
    session.initialize();
    session.select_role(Role::Passenger).unwrap();

    let result = session.submit_passenger_setup(&PassengerForm {
        phone: "12345".to_string(),
        ..passenger_form()
    });

    match result {
        Err(ControllerError::SetupRejected(rejection)) => {
            assert_eq!(
                rejection.errors(),
                &[ValidationError::InvalidPhone("Mobile number")]
            );
        }
        other => panic!("expected setup rejection, got {other:?}"),
    }
    assert_eq!(session.phase(), Some(Phase::SettingUp));
    assert_eq!(session.screen(), Some(Screen::PassengerSetup));
    assert!(store.is_empty());
}

#[test]
fn end_shift_keeps_role_and_clears_storage() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_defaults(store.clone());
    session.initialize();
    session.select_role(Role::Conductor).unwrap();
    session.submit_conductor_setup(&conductor_form()).unwrap();
    assert!(!store.is_empty());

    assert_eq!(session.end_shift().unwrap(), Screen::ConductorSetup);

    let state = session.state().unwrap();
    assert_eq!(state.role(), Role::Conductor);
    assert!(state.needs_setup());
    assert!(state.profile().is_none());
    assert!(store.is_empty());

    // next shift on a different route
    session
        .submit_conductor_setup(&ConductorForm {
            route: "12B".to_string(),
            ..conductor_form()
        })
        .unwrap();
    assert_eq!(
        session.state().unwrap().profile().unwrap().assigned_route.as_deref(),
        Some("12B")
    );
}

#[test]
fn logout_from_profile_tab_returns_to_role_selection() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_defaults(store.clone());
    session.initialize();
    session.select_role(Role::Passenger).unwrap();
    session.submit_passenger_setup(&passenger_form()).unwrap();

    assert_eq!(session.change_tab(Tab::Schedule).unwrap(), Screen::Schedule);
    assert_eq!(session.change_tab(Tab::Profile).unwrap(), Screen::Profile);
    assert_eq!(session.logout().unwrap(), Screen::RoleSelection);
    assert_eq!(session.logout().unwrap(), Screen::RoleSelection);

    let state = session.state().unwrap();
    assert_eq!(state.active_tab(), Tab::Home);
    assert!(state.emergency_contact().is_none());
    assert!(store.is_empty());
}

#[test]
fn back_from_setup_discards_role() {
    let mut session = SessionController::with_defaults(MemoryStore::new());
    session.initialize();
    session.select_role(Role::Conductor).unwrap();

    assert_eq!(session.logout().unwrap(), Screen::RoleSelection);
    assert_eq!(session.select_role(Role::Passenger).unwrap(), Screen::PassengerSetup);
}

#[test]
fn configured_key_and_horizon_apply_to_controller() {
    let config = SessionConfig::from_toml_str(
        "storage_key = \"trackit_demo\"\nexpiry_horizon_secs = 60\n",
    )
    .unwrap();
    let store = MemoryStore::new();
    let mut session = SessionController::new(store.clone(), &config);
    session.initialize();
    session.select_role(Role::Conductor).unwrap();
    session.submit_conductor_setup(&conductor_form()).unwrap();

    assert!(store.get("trackit_demo").unwrap().is_some());
    assert!(store.get(KEY).unwrap().is_none());

    let mut restarted = SessionController::new(store, &config);
    let later = Utc::now() + Duration::minutes(2);
    assert_eq!(restarted.initialize_at(later), Screen::ConductorSetup);
}
