//! Conductor setup form.

use super::error::SetupRejection;
use super::rules::{collect, normalize_phone, optional, phone, required};
use crate::model::Profile;
use serde::{Deserialize, Serialize};

/// Raw conductor form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductorForm {
    pub name: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub theme_color: Option<String>,
    /// Route picked for this shift.
    pub route: String,
}

/// Validated conductor payload; the profile always carries a route.
#[derive(Clone, Debug, PartialEq)]
pub struct ConductorSetup {
    profile: Profile,
}

impl ConductorSetup {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn route(&self) -> &str {
        self.profile.assigned_route.as_deref().unwrap_or_default()
    }

    pub fn into_profile(self) -> Profile {
        self.profile
    }
}

pub fn validate_conductor(form: &ConductorForm) -> Result<ConductorSetup, SetupRejection> {
    let name = form.name.trim();
    let digits = normalize_phone(&form.phone);
    let route = form.route.trim();

    collect(vec![
        required(name, "Name"),
        phone(&form.phone, &digits, "Mobile number"),
        required(route, "Route"),
    ])?;

    Ok(ConductorSetup {
        profile: Profile {
            name: name.to_string(),
            phone: digits,
            profile_image: optional(&form.profile_image),
            theme_color: optional(&form.theme_color),
            assigned_route: Some(route.to_string()),
        },
    })
}
