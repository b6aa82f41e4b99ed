//! Newsletter subscription endpoint.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, FormValidationError, NewSubscription, NewsletterSubscription};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_form_validation_error;

/// Request body for `POST /api/newsletter`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewsletterRequest {
    pub email: String,
}

impl TryFrom<NewsletterRequest> for NewSubscription {
    type Error = FormValidationError;

    fn try_from(value: NewsletterRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.email)
    }
}

/// Subscribe an email address to the newsletter.
#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "Subscription stored", body = NewsletterSubscription),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already subscribed", body = Error)
    ),
    tags = ["leads"],
    operation_id = "subscribeNewsletter",
    security([])
)]
#[post("/newsletter")]
pub async fn subscribe_newsletter(
    state: web::Data<HttpState>,
    payload: web::Json<NewsletterRequest>,
) -> ApiResult<web::Json<NewsletterSubscription>> {
    let input =
        NewSubscription::try_from(payload.into_inner()).map_err(map_form_validation_error)?;
    let subscription = state.newsletters.subscribe(input).await?;
    Ok(web::Json(subscription))
}
