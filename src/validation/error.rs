//! Setup validation errors.

use std::fmt;
use thiserror::Error;

/// One failed rule on a setup form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("{0} must be a valid 10-digit mobile number.")]
    InvalidPhone(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Every rule a submitted form broke, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRejection {
    errors: Vec<ValidationError>,
}

impl SetupRejection {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Inline message shown under the form: the first failure.
    pub fn message(&self) -> String {
        self.errors
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Invalid input.".to_string())
    }
}

impl fmt::Display for SetupRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for SetupRejection {}
