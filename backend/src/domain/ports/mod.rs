//! Driving ports for the entity store and authentication.
//!
//! In hexagonal terms these are the interfaces inbound adapters call to
//! mutate or query state without importing outbound persistence concerns.
//! Handler tests substitute deterministic implementations; production wires
//! the in-memory adapter in `outbound::memory`.

mod contact_repository;
mod login_service;
mod newsletter_repository;
mod signup_repository;
mod user_repository;

pub use contact_repository::ContactRepository;
pub use login_service::LoginService;
pub use newsletter_repository::NewsletterRepository;
pub use signup_repository::SignupRepository;
pub use user_repository::UserRepository;
