//! Port for newsletter subscription persistence.

use async_trait::async_trait;

use crate::domain::{Error, NewSubscription, NewsletterSubscription};

/// Store operations for newsletter subscriptions.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Insert a subscription if the email is not already present.
    ///
    /// The duplicate check and the insert are a single atomic step: two
    /// concurrent submissions of the same email cannot both succeed. A
    /// duplicate fails with [`crate::domain::ErrorCode::Conflict`] and
    /// leaves the collection unchanged.
    async fn subscribe(&self, input: NewSubscription) -> Result<NewsletterSubscription, Error>;
}
