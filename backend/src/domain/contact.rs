//! Contact inquiry entity.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::validation::{FormValidationError, validate_non_empty_field};

/// A stored contact inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl Contact {
    /// Assemble a stored record from validated input and a store-assigned id.
    pub fn create(id: i32, input: NewContact) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            company: input.company,
            message: input.message,
        }
    }
}

/// Validated input for [`Contact`] creation.
///
/// ## Invariants
/// - every field is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    company: String,
    message: String,
}

impl NewContact {
    /// Validate raw form values into a creation input.
    pub fn try_new(
        name: String,
        email: String,
        company: String,
        message: String,
    ) -> Result<Self, FormValidationError> {
        Ok(Self {
            name: validate_non_empty_field(name, "name")?,
            email: validate_non_empty_field(email, "email")?,
            company: validate_non_empty_field(company, "company")?,
            message: validate_non_empty_field(message, "message")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> NewContact {
        NewContact::try_new(
            "Ada".to_owned(),
            "ada@example.com".to_owned(),
            "Analytical Engines".to_owned(),
            "Hello".to_owned(),
        )
        .expect("valid input")
    }

    #[rstest]
    #[case("", "a@x.com", "C", "hi", "name")]
    #[case("A", "  ", "C", "hi", "email")]
    #[case("A", "a@x.com", "", "hi", "company")]
    #[case("A", "a@x.com", "C", "", "message")]
    fn blank_fields_fail_validation(
        #[case] name: &str,
        #[case] email: &str,
        #[case] company: &str,
        #[case] message: &str,
        #[case] expected_field: &'static str,
    ) {
        let err = NewContact::try_new(
            name.to_owned(),
            email.to_owned(),
            company.to_owned(),
            message.to_owned(),
        )
        .expect_err("blank field");
        assert_eq!(
            err,
            FormValidationError::EmptyField {
                field: expected_field
            }
        );
    }

    #[rstest]
    fn create_carries_input_and_id() {
        let contact = Contact::create(7, valid_input());
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.message, "Hello");
    }
}
