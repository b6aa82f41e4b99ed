//! Prospective-client signup endpoint.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, FormValidationError, NewSignup, Signup};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_form_validation_error;

/// Request body for `POST /api/signup`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupRequest {
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub phone: String,
    pub business_needs: Vec<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl TryFrom<SignupRequest> for NewSignup {
    type Error = FormValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_new(
            value.company_name,
            value.company_size,
            value.industry,
            value.full_name,
            value.email,
            value.position,
            value.phone,
            value.business_needs,
            value.additional_info,
        )
    }
}

/// Accept a prospective-client signup and return the stored record.
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup stored", body = Signup),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["leads"],
    operation_id = "submitSignup",
    security([])
)]
#[post("/signup")]
pub async fn submit_signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<Signup>> {
    let input = NewSignup::try_from(payload.into_inner()).map_err(map_form_validation_error)?;
    let signup = state.signups.create(input).await?;
    Ok(web::Json(signup))
}
