//! TrackIt session: identity and screen routing for the bus-tracking client.
//!
//! The crate follows a "pure core, imperative shell" split. The core
//! decides which screen a user sees from their role, whether setup is
//! complete and the selected tab; the shell loads and saves the single
//! session record in a device-local key-value store.
//!
//! # Modules
//!
//! - [`core`]: `State` trait, guards and immutable transition history
//! - [`model`]: roles, profiles and the persisted [`SessionRecord`]
//! - [`persistence`]: store abstraction, record schema, expiry rule, load/save policy
//! - [`routing`]: phases, screen resolution and the transition table
//! - [`validation`]: setup form validators
//! - [`controller`]: the stateful owner tying it together
//!
//! # Example
//!
//! ```rust
//! use trackit_session::{
//!     ConductorForm, MemoryStore, Role, Screen, SessionController,
//! };
//!
//! let store = MemoryStore::new();
//! let mut session = SessionController::with_defaults(store.clone());
//! assert_eq!(session.initialize(), Screen::RoleSelection);
//!
//! session.select_role(Role::Conductor).unwrap();
//! let screen = session
//!     .submit_conductor_setup(&ConductorForm {
//!         name: "Ravi".to_string(),
//!         phone: "9999999999".to_string(),
//!         route: "11".to_string(),
//!         ..ConductorForm::default()
//!     })
//!     .unwrap();
//! assert_eq!(screen, Screen::ConductorDashboard);
//!
//! // a fresh process sees the same session
//! let mut restarted = SessionController::with_defaults(store);
//! assert_eq!(restarted.initialize(), Screen::ConductorDashboard);
//! ```

pub mod config;
pub mod controller;
pub mod core;
mod macros;
pub mod model;
pub mod persistence;
pub mod routing;
pub mod validation;

pub use config::{ConfigError, SessionConfig};
pub use controller::{ControllerError, SessionController};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use model::{EmergencyContact, Profile, Role, SessionRecord};
pub use persistence::{
    FileStore, InitialState, KeyValueStore, LoadOutcome, MemoryStore, PersistencePolicy,
    StorageError,
};
pub use routing::{resolve_screen, Action, Phase, Screen, SessionState, Tab, TransitionError};
pub use validation::{
    validate_conductor, validate_passenger, ConductorForm, PassengerForm, SetupRejection,
    ValidationError,
};
