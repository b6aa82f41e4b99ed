//! Validation primitives shared by form input types.
//!
//! Field names carried in the errors use the wire (camelCase) spelling so
//! inbound adapters can surface them to clients unchanged.

use std::fmt;

/// Validation failures raised by form input constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidationError {
    /// A required string field was missing content once trimmed.
    EmptyField { field: &'static str },
    /// A required sequence field contained no entries.
    EmptyList { field: &'static str },
    /// A sequence entry was blank.
    EmptyListEntry { field: &'static str, index: usize },
    /// The password fell short of the minimum length.
    PasswordTooShort { min: usize },
    /// The confirmation field did not match the password.
    PasswordMismatch,
}

impl fmt::Display for FormValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::EmptyList { field } => write!(f, "{field} must contain at least one entry"),
            Self::EmptyListEntry { field, index } => {
                write!(f, "{field} entry {index} must not be empty")
            }
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters")
            }
            Self::PasswordMismatch => write!(f, "Passwords don't match"),
        }
    }
}

impl std::error::Error for FormValidationError {}

/// Accept a required string field, rejecting whitespace-only content.
///
/// The caller-supplied value is returned unchanged; trimming is applied only
/// for the emptiness check.
pub(crate) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, FormValidationError> {
    if value.trim().is_empty() {
        return Err(FormValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Accept a required sequence field, rejecting empty sequences and blank
/// entries.
pub(crate) fn validate_non_empty_list(
    values: Vec<String>,
    field: &'static str,
) -> Result<Vec<String>, FormValidationError> {
    if values.is_empty() {
        return Err(FormValidationError::EmptyList { field });
    }
    for (index, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            return Err(FormValidationError::EmptyListEntry { field, index });
        }
    }
    Ok(values)
}
