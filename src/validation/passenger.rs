//! Passenger setup form.

use super::error::SetupRejection;
use super::rules::{collect, email, normalize_phone, optional, phone, required};
use crate::model::{EmergencyContact, Profile};
use serde::{Deserialize, Serialize};

/// Raw passenger form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerForm {
    pub name: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub theme_color: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Validated passenger payload. Only [`validate_passenger`] builds one.
#[derive(Clone, Debug, PartialEq)]
pub struct PassengerSetup {
    profile: Profile,
    contact: EmergencyContact,
}

impl PassengerSetup {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn contact(&self) -> &EmergencyContact {
        &self.contact
    }

    pub fn into_parts(self) -> (Profile, EmergencyContact) {
        (self.profile, self.contact)
    }
}

pub fn validate_passenger(form: &PassengerForm) -> Result<PassengerSetup, SetupRejection> {
    let name = form.name.trim();
    let phone_digits = normalize_phone(&form.phone);
    let contact_name = form.contact_name.trim();
    let contact_digits = normalize_phone(&form.contact_phone);
    let contact_email = form.contact_email.trim();

    collect(vec![
        required(name, "Name"),
        phone(&form.phone, &phone_digits, "Mobile number"),
        required(contact_name, "Guardian name"),
        phone(&form.contact_phone, &contact_digits, "Guardian mobile number"),
        email(contact_email),
    ])?;

    Ok(PassengerSetup {
        profile: Profile {
            name: name.to_string(),
            phone: phone_digits,
            profile_image: optional(&form.profile_image),
            theme_color: optional(&form.theme_color),
            assigned_route: None,
        },
        contact: EmergencyContact {
            name: contact_name.to_string(),
            phone: contact_digits,
            email: contact_email.to_string(),
        },
    })
}
