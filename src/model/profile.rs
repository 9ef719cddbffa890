//! Profile and emergency contact data.

use serde::{Deserialize, Serialize};

/// Identity details collected during setup.
///
/// `assigned_route` is only ever set for conductors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Avatar as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_route: Option<String>,
}

impl Profile {
    /// A profile is complete once it carries a name.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Guardian notified by the passenger SOS button.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    /// Empty when the passenger gave no email.
    #[serde(default)]
    pub email: String,
}
