//! Newsletter subscription entity.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::validation::{FormValidationError, validate_non_empty_field};

/// A stored newsletter subscription.
///
/// The email is unique across the collection, compared exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: i32,
    pub email: String,
}

impl NewsletterSubscription {
    /// Assemble a stored record from validated input and a store-assigned id.
    pub fn create(id: i32, input: NewSubscription) -> Self {
        Self {
            id,
            email: input.email,
        }
    }
}

/// Validated input for [`NewsletterSubscription`] creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    email: String,
}

impl NewSubscription {
    /// Validate a raw form value into a creation input.
    pub fn try_new(email: String) -> Result<Self, FormValidationError> {
        Ok(Self {
            email: validate_non_empty_field(email, "email")?,
        })
    }

    /// Email address as submitted, used for the uniqueness scan.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_fails_validation() {
        let err = NewSubscription::try_new("  ".to_owned()).expect_err("blank email");
        assert_eq!(err, FormValidationError::EmptyField { field: "email" });
    }

    #[test]
    fn create_carries_email_and_id() {
        let input = NewSubscription::try_new("x@y.com".to_owned()).expect("valid email");
        let subscription = NewsletterSubscription::create(1, input);
        assert_eq!(subscription.id, 1);
        assert_eq!(subscription.email, "x@y.com");
    }
}
