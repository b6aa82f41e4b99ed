//! User account entity and registration input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::credential::PasswordDigest;
use crate::domain::validation::{FormValidationError, validate_non_empty_field};

/// Role granted to every account created through the public surface.
pub const DEFAULT_ROLE: &str = "client";

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// A stored user account.
///
/// ## Invariants
/// - `username` and `email` are unique across the collection, compared
///   case-insensitively.
/// - `role` is always [`DEFAULT_ROLE`]; no public input can set it.
/// - `credential` holds a salted digest, never a raw password, and is never
///   serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: i32,
    username: String,
    email: String,
    #[serde(skip)]
    credential: String,
    company_name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a stored record from validated input, a store-assigned id,
    /// and the creation timestamp. The role is fixed here so no other code
    /// path can grant anything but [`DEFAULT_ROLE`].
    pub fn create(id: i32, input: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            credential: input.credential,
            company_name: input.company_name,
            role: DEFAULT_ROLE.to_owned(),
            created_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Username as registered.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email address as registered.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored credential digest, for verification only.
    pub(crate) fn credential(&self) -> &str {
        self.credential.as_str()
    }

    /// Company the account belongs to.
    pub fn company_name(&self) -> &str {
        self.company_name.as_str()
    }

    /// Granted role.
    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    /// Creation timestamp stamped by the store.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Validated input for [`User`] creation, credential already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
    credential: String,
    company_name: String,
}

impl NewUser {
    /// Username used for the case-insensitive uniqueness scan.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email used for the case-insensitive uniqueness scan.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Validated registration form, holding the raw password only until it is
/// hashed into a [`NewUser`].
///
/// ## Invariants
/// - `username`, `email`, and `company_name` are non-empty once trimmed.
/// - the password is at least [`PASSWORD_MIN_LEN`] characters and matched
///   its confirmation field.
#[derive(Debug)]
pub struct Registration {
    username: String,
    email: String,
    password: Zeroizing<String>,
    company_name: String,
}

impl Registration {
    /// Validate raw form values into a registration.
    pub fn try_new(
        username: String,
        email: String,
        password: String,
        confirm_password: String,
        company_name: String,
    ) -> Result<Self, FormValidationError> {
        let username = validate_non_empty_field(username, "username")?;
        let email = validate_non_empty_field(email, "email")?;
        let company_name = validate_non_empty_field(company_name, "companyName")?;

        let password = Zeroizing::new(password);
        let confirm_password = Zeroizing::new(confirm_password);
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(FormValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LEN,
            });
        }
        if *password != *confirm_password {
            return Err(FormValidationError::PasswordMismatch);
        }

        Ok(Self {
            username,
            email,
            password,
            company_name,
        })
    }

    /// Hash the password and produce the store-facing creation input.
    pub fn into_new_user(self) -> NewUser {
        let credential = PasswordDigest::hash(&self.password).into();
        NewUser {
            username: self.username,
            email: self.email,
            credential,
            company_name: self.company_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn registration(password: &str, confirm: &str) -> Result<Registration, FormValidationError> {
        Registration::try_new(
            "alice".to_owned(),
            "alice@example.com".to_owned(),
            password.to_owned(),
            confirm.to_owned(),
            "Wonderland Ltd".to_owned(),
        )
    }

    #[rstest]
    fn seven_character_passwords_fail_regardless_of_other_fields() {
        let err = registration("seven77", "seven77").expect_err("short password");
        assert_eq!(err, FormValidationError::PasswordTooShort { min: 8 });
    }

    #[rstest]
    fn mismatched_confirmation_fails() {
        let err = registration("password123", "password124").expect_err("mismatch");
        assert_eq!(err, FormValidationError::PasswordMismatch);
    }

    #[rstest]
    #[case("", "a@x.com", "Acme", "username")]
    #[case("alice", "  ", "Acme", "email")]
    #[case("alice", "a@x.com", "", "companyName")]
    fn blank_identity_fields_fail(
        #[case] username: &str,
        #[case] email: &str,
        #[case] company_name: &str,
        #[case] expected_field: &'static str,
    ) {
        let err = Registration::try_new(
            username.to_owned(),
            email.to_owned(),
            "password123".to_owned(),
            "password123".to_owned(),
            company_name.to_owned(),
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
    fn into_new_user_hashes_the_password() {
        let new_user = registration("password123", "password123")
            .expect("valid registration")
            .into_new_user();
        assert_ne!(new_user.credential, "password123");
        assert!(new_user.credential.starts_with("v1$"));
    }

    #[rstest]
    fn create_fixes_the_role_and_skips_credential_serialisation() {
        let new_user = registration("password123", "password123")
            .expect("valid registration")
            .into_new_user();
        let user = User::create(1, new_user, Utc::now());
        assert_eq!(user.role(), DEFAULT_ROLE);

        let value = serde_json::to_value(&user).expect("serialise");
        assert!(value.get("credential").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "alice");
        assert_eq!(value["companyName"], "Wonderland Ltd");
    }
}
