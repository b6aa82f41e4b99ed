//! Port for contact inquiry persistence.

use async_trait::async_trait;

use crate::domain::{Contact, Error, NewContact};

/// Store operations for contact inquiries.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new inquiry unconditionally and return the stored record
    /// with its assigned id.
    async fn create(&self, input: NewContact) -> Result<Contact, Error>;
}
