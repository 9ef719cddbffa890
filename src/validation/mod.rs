//! Setup form validation.
//!
//! Validators turn raw form input into payload types the routing machine
//! accepts. Those payload types have no public constructor, so an
//! unvalidated profile cannot reach a setup-completion transition.
//!
//! All rules run on every submission and every failure is kept (see
//! [`SetupRejection::errors`]); the UI shows the first one.

mod conductor;
mod error;
mod passenger;
mod rules;

pub use conductor::{validate_conductor, ConductorForm, ConductorSetup};
pub use error::{SetupRejection, ValidationError};
pub use passenger::{validate_passenger, PassengerForm, PassengerSetup};
pub use rules::normalize_phone;
