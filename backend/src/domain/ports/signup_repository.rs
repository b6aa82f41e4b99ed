//! Port for prospective-client signup persistence.

use async_trait::async_trait;

use crate::domain::{Error, NewSignup, Signup};

/// Store operations for prospective-client signups.
#[async_trait]
pub trait SignupRepository: Send + Sync {
    /// Insert a new signup unconditionally, stamping the creation time.
    async fn create(&self, input: NewSignup) -> Result<Signup, Error>;
}
