//! Field rules shared by both setup forms.
//!
//! Each rule yields a `Validation` so a form can run all of them and report
//! every problem at once.

use super::error::{SetupRejection, ValidationError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Check = Validation<(), NonEmptyVec<ValidationError>>;

pub(crate) const PHONE_DIGITS: usize = 10;

/// Keep only ASCII digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Trimmed value, `None` when blank.
pub(crate) fn optional(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn required(value: &str, field: &'static str) -> Check {
    if value.is_empty() {
        Validation::fail(ValidationError::MissingField(field))
    } else {
        Validation::success(())
    }
}

/// `digits` is the normalized form of `raw`.
pub(crate) fn phone(raw: &str, digits: &str, field: &'static str) -> Check {
    if raw.trim().is_empty() {
        Validation::fail(ValidationError::MissingField(field))
    } else if digits.len() != PHONE_DIGITS {
        Validation::fail(ValidationError::InvalidPhone(field))
    } else {
        Validation::success(())
    }
}

/// Email is optional; when given it must at least contain `@`.
pub(crate) fn email(value: &str) -> Check {
    if value.is_empty() || value.contains('@') {
        Validation::success(())
    } else {
        Validation::fail(ValidationError::InvalidEmail)
    }
}

/// Run every check and gather all failures.
pub(crate) fn collect(checks: Vec<Check>) -> Result<(), SetupRejection> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(SetupRejection::new(errors.iter().cloned().collect())),
    }
}
