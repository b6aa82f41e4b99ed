//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without real wiring. The store is
//! constructed once at startup and injected here; there is no module-level
//! shared state.

use std::sync::Arc;

use crate::domain::ports::{
    ContactRepository, LoginService, NewsletterRepository, SignupRepository, UserRepository,
};
use crate::outbound::MemoryStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactRepository>,
    pub newsletters: Arc<dyn NewsletterRepository>,
    pub signups: Arc<dyn SignupRepository>,
    pub users: Arc<dyn UserRepository>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Wire every port to one shared in-memory store.
    pub fn with_memory_store() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            contacts: store.clone(),
            newsletters: store.clone(),
            signups: store.clone(),
            users: store.clone(),
            login: store,
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::with_memory_store()
    }
}
