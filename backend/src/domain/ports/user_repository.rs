//! Port for user account persistence and lookups.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Store operations for user accounts.
///
/// Username and email lookups compare case-insensitively, matching the
/// uniqueness rule enforced at creation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user if neither the username nor the email is taken.
    ///
    /// Both checks happen atomically with the insert. Collisions fail with
    /// [`crate::domain::ErrorCode::Conflict`] and a message naming the
    /// offending field; the username check runs first.
    async fn create(&self, input: NewUser) -> Result<User, Error>;

    /// Fetch a user by store-assigned id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, Error>;

    /// Fetch a user by username, case-insensitively.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error>;

    /// Fetch a user by email, case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;
}
