//! Session data model: roles, profiles and the persisted record.

mod profile;
mod record;
mod role;

pub use profile::{EmergencyContact, Profile};
pub use record::SessionRecord;
pub use role::Role;
