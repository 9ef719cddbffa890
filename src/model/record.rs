//! The persisted session record.

use super::profile::{EmergencyContact, Profile};
use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable snapshot of role, profile and the time it was written.
///
/// Only one record exists at a time and every write replaces it whole.
/// The timestamp travels as integer milliseconds since the epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub role: Role,
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    pub fn passenger(
        profile: Profile,
        emergency_contact: Option<EmergencyContact>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            role: Role::Passenger,
            profile,
            emergency_contact,
            timestamp,
        }
    }

    pub fn conductor(profile: Profile, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: Role::Conductor,
            profile,
            emergency_contact: None,
            timestamp,
        }
    }

    /// Same record with a new timestamp.
    pub fn stamped(self, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, ..self }
    }
}
