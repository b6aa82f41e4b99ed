//! Domain entities, validation, and the ports handlers depend on.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers. Types are immutable once stored; each module documents its
//! invariants and serialisation contract in Rustdoc.

pub mod auth;
pub mod contact;
pub mod credential;
pub mod error;
pub mod newsletter;
pub mod ports;
pub mod signup;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::auth::LoginCredentials;
pub use self::contact::{Contact, NewContact};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::newsletter::{NewSubscription, NewsletterSubscription};
pub use self::signup::{NewSignup, Signup};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DEFAULT_ROLE, NewUser, PASSWORD_MIN_LEN, Registration, User};
pub use self::validation::FormValidationError;
