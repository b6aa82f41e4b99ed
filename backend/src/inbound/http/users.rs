//! Account endpoints: registration, login, logout, current user.
//!
//! ```text
//! POST /api/register {"username":"alice","email":"a@x.com","password":"password123",
//!                     "confirmPassword":"password123","companyName":"Acme"}
//! POST /api/login    {"username":"alice","password":"password123"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, FormValidationError, LoginCredentials, Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_form_validation_error;

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company_name: String,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = FormValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_new(
            value.username,
            value.email,
            value.password,
            value.confirm_password,
            value.company_name,
        )
    }
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = FormValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_new(&value.username, &value.password)
    }
}

/// Create an account and establish a session for it.
///
/// The stored credential never appears in the response.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = User,
         headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Username or email already exists", body = Error)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<User>> {
    let registration =
        Registration::try_from(payload.into_inner()).map_err(map_form_validation_error)?;
    let user = state.users.create(registration.into_new_user()).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(user))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = User,
         headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_form_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(user))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses((status = 200, description = "Session cleared")),
    tags = ["users"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::Ok().finish()
}

/// Return the account bound to the current session.
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/user")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<User>> {
    let user_id = session.require_user_id()?;
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        // A session can outlive the process that issued it; treat a stale
        // user id as a missing login.
        .ok_or_else(|| Error::unauthorized("login required"))?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{memory_state, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(memory_state()).service(
            web::scope("/api")
                .wrap(test_session_middleware())
                .service(register)
                .service(login)
                .service(logout)
                .service(current_user),
        )
    }

    fn register_payload(username: &str, email: &str) -> Value {
        json!({
            "username": username,
            "email": email,
            "password": "password123",
            "confirmPassword": "password123",
            "companyName": "Acme",
        })
    }

    async fn post_json(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        uri: &str,
        body: Value,
    ) -> actix_web::dev::ServiceResponse {
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        actix_test::call_service(app, request).await
    }

    #[actix_web::test]
    async fn register_returns_the_user_without_credentials() {
        let app = actix_test::init_service(test_app()).await;

        let response = post_json(&app, "/api/register", register_payload("alice", "a@x.com")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["id"], 1);
        assert_eq!(value["username"], "alice");
        assert_eq!(value["role"], "client");
        assert!(value["createdAt"].is_string());
        assert!(value.get("password").is_none());
        assert!(value.get("credential").is_none());
    }

    #[actix_web::test]
    async fn short_password_fails_validation() {
        let app = actix_test::init_service(test_app()).await;

        let mut body = register_payload("alice", "a@x.com");
        body["password"] = json!("seven77");
        body["confirmPassword"] = json!("seven77");
        let response = post_json(&app, "/api/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["details"]["field"], "password");
        assert_eq!(value["details"]["code"], "password_too_short");
    }

    #[actix_web::test]
    async fn mismatched_confirmation_is_scoped_to_the_confirmation_field() {
        let app = actix_test::init_service(test_app()).await;

        let mut body = register_payload("alice", "a@x.com");
        body["confirmPassword"] = json!("password124");
        let response = post_json(&app, "/api/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["message"], "Passwords don't match");
        assert_eq!(value["details"]["field"], "confirmPassword");
    }

    #[actix_web::test]
    async fn duplicate_username_differs_only_by_case_and_conflicts() {
        let app = actix_test::init_service(test_app()).await;

        let response = post_json(&app, "/api/register", register_payload("Alice", "a@x.com")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = post_json(&app, "/api/register", register_payload("alice", "b@x.com")).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["message"], "Username already exists");
    }

    #[actix_web::test]
    async fn register_login_and_current_user_round_trip() {
        let app = actix_test::init_service(test_app()).await;

        post_json(&app, "/api/register", register_payload("alice", "a@x.com")).await;

        let response = post_json(
            &app,
            "/api/login",
            json!({"username": "alice", "password": "password123"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned();
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["username"], "alice");

        let request = actix_test::TestRequest::get()
            .uri("/api/user")
            .cookie(cookie)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["id"], 1);
        assert_eq!(value["companyName"], "Acme");
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorised() {
        let app = actix_test::init_service(test_app()).await;

        post_json(&app, "/api/register", register_payload("alice", "a@x.com")).await;
        let response = post_json(
            &app,
            "/api/login",
            json!({"username": "alice", "password": "wrong-password"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["message"], "Invalid username or password");
    }

    #[actix_web::test]
    async fn current_user_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get().uri("/api/user").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn logout_clears_the_session() {
        let app = actix_test::init_service(test_app()).await;

        let response = post_json(&app, "/api/register", register_payload("alice", "a@x.com")).await;
        let cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie")
            .into_owned();

        let request = actix_test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie.clone())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cleared = response
            .response()
            .cookies()
            .find(|candidate| candidate.name() == "session")
            .expect("removal cookie");

        let request = actix_test::TestRequest::get()
            .uri("/api/user")
            .cookie(cleared.into_owned())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
