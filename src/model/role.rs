//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity category of the current user.
///
/// Serialized in upper case (`"PASSENGER"`), which is also the form used
/// in the persisted session record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// No role chosen yet.
    #[default]
    None,
    /// Rider following buses on the live map.
    Passenger,
    /// Operator broadcasting a bus on an assigned route.
    Conductor,
}

impl Role {
    pub fn is_none(self) -> bool {
        matches!(self, Role::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::None => "NONE",
            Role::Passenger => "PASSENGER",
            Role::Conductor => "CONDUCTOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_is_none() {
        assert_eq!(Role::default(), Role::None);
        assert!(Role::default().is_none());
        assert!(!Role::Conductor.is_none());
    }

    #[test]
    fn role_uses_upper_case_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Passenger).unwrap(), "\"PASSENGER\"");
        assert_eq!(serde_json::to_string(&Role::Conductor).unwrap(), "\"CONDUCTOR\"");

        let parsed: Role = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(parsed, Role::None);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Role::Conductor.to_string(), "CONDUCTOR");
    }
}
