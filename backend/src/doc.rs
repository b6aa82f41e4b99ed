//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST surface: the lead-capture endpoints, the account endpoints, and
//! the health probes, plus the session cookie security scheme.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Contact, Error, ErrorCode, NewsletterSubscription, Signup, User};
use crate::inbound::http::contact::ContactRequest;
use crate::inbound::http::newsletter::NewsletterRequest;
use crate::inbound::http::signup::SignupRequest;
use crate::inbound::http::users::{LoginRequest, RegisterRequest};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login or POST /api/register.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Lead capture backend API",
        description = "Lead-capture form submissions and session-authenticated accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::newsletter::subscribe_newsletter,
        crate::inbound::http::signup::submit_signup,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        Contact,
        NewsletterSubscription,
        Signup,
        User,
        ContactRequest,
        NewsletterRequest,
        SignupRequest,
        RegisterRequest,
        LoginRequest,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "leads", description = "Lead-capture form submissions"),
        (name = "users", description = "Registration, login, and session state"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
