//! Mapping from form validation failures to HTTP error payloads.
//!
//! Every validation failure becomes an invalid-request error carrying
//! `details: { "field", "code" }` so clients can attach the message to the
//! offending form field.

use serde_json::json;

use crate::domain::{Error, FormValidationError};

/// Translate a [`FormValidationError`] into the client-facing envelope.
pub(crate) fn map_form_validation_error(err: FormValidationError) -> Error {
    let message = err.to_string();
    let (field, code) = match &err {
        FormValidationError::EmptyField { field } => (*field, "empty_field"),
        FormValidationError::EmptyList { field } => (*field, "empty_list"),
        FormValidationError::EmptyListEntry { field, .. } => (*field, "empty_list_entry"),
        FormValidationError::PasswordTooShort { .. } => ("password", "password_too_short"),
        FormValidationError::PasswordMismatch => ("confirmPassword", "password_mismatch"),
    };
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}
