//! Driving port for login use-cases.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// Implementations must return the same
    /// [`crate::domain::ErrorCode::Unauthorized`] message whether the
    /// username is unknown or the password is wrong.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
