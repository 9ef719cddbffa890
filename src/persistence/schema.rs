//! Parser for the stored session payload.
//!
//! Turns the raw string from the store into a tagged result instead of
//! trusting whatever fields happen to be present.

use crate::model::{EmergencyContact, Profile, Role, SessionRecord};
use chrono::{TimeZone, Utc};
use serde::Deserialize;

/// Outcome of parsing a stored payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedRecord {
    Valid(SessionRecord),
    Invalid(String),
}

impl ParsedRecord {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedRecord::Valid(_))
    }
}

/// Wire shape before validation. Profile may be missing for passengers
/// who abandoned setup part way.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    role: Role,
    #[serde(default)]
    profile: Option<Profile>,
    #[serde(default)]
    emergency_contact: Option<EmergencyContact>,
    timestamp: i64,
}

/// Parse and validate a stored payload.
///
/// Rejected: anything that is not a JSON object of the record shape, a
/// `NONE` role, an out-of-range timestamp, and conductor records without
/// a profile. A passenger record without a profile is accepted with an
/// empty one so the restore step can route it back to setup.
pub fn parse_record(raw: &str) -> ParsedRecord {
    let parsed: RawRecord = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => return ParsedRecord::Invalid(format!("malformed payload: {e}")),
    };

    let Some(timestamp) = Utc.timestamp_millis_opt(parsed.timestamp).single() else {
        return ParsedRecord::Invalid(format!("timestamp {} out of range", parsed.timestamp));
    };

    match parsed.role {
        Role::None => ParsedRecord::Invalid("record has no role".to_string()),
        Role::Conductor => match parsed.profile {
            Some(profile) => ParsedRecord::Valid(SessionRecord::conductor(profile, timestamp)),
            None => ParsedRecord::Invalid("conductor record has no profile".to_string()),
        },
        Role::Passenger => ParsedRecord::Valid(SessionRecord::passenger(
            parsed.profile.unwrap_or_default(),
            parsed.emergency_contact,
            timestamp,
        )),
    }
}
