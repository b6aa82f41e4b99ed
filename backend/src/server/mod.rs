//! Server construction and middleware wiring.
//!
//! `main` stays thin: configuration comes from the environment here, and
//! [`build_app`] assembles the same application factory used by the
//! integration tests.

use std::env;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
#[cfg(test)]
use actix_http::Request;
use actix_web::{App, HttpResponse, web};
use tracing::warn;

use crate::domain::Error;
use crate::inbound::http::contact::submit_contact;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::newsletter::subscribe_newsletter;
use crate::inbound::http::signup::submit_signup;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{current_user, login, logout, register};
use crate::middleware::Trace;

/// Runtime configuration resolved from the environment.
pub struct ServerConfig {
    pub key: Key,
    pub cookie_secure: bool,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// The session key is loaded from `SESSION_KEY_FILE`. Debug builds and
    /// processes with `SESSION_ALLOW_EPHEMERAL=1` fall back to a generated
    /// key when the file is unreadable; release builds refuse to start.
    pub fn from_env() -> std::io::Result<Self> {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5000);

        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
        let key = match std::fs::read(&key_path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(std::io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        Ok(Self {
            key,
            cookie_secure,
            port,
        })
    }
}

/// Build the cookie-backed session middleware.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Map JSON deserialisation failures onto the standard error envelope
/// instead of Actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

async fn not_found() -> Result<HttpResponse, Error> {
    Err(Error::not_found("Resource not found"))
}

/// Assemble the application: API routes behind the session middleware,
/// health probes outside it, and a JSON catch-all for unmatched paths.
pub fn build_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(session)
        .service(submit_contact)
        .service(subscribe_newsletter)
        .service(submit_signup)
        .service(register)
        .service(login)
        .service(logout)
        .service(current_user);

    App::new()
        .app_data(state)
        .app_data(health)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(live)
        .service(ready)
        .default_service(web::route().to(not_found))
}
