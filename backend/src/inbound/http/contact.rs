//! Contact form endpoint.
//!
//! ```text
//! POST /api/contact {"name":"A","email":"a@x.com","company":"C","message":"hi"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, Error, FormValidationError, NewContact};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_form_validation_error;

/// Request body for `POST /api/contact`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl TryFrom<ContactRequest> for NewContact {
    type Error = FormValidationError;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.name, value.email, value.company, value.message)
    }
}

/// Accept a contact inquiry and return the stored record.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Inquiry stored", body = Contact),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["leads"],
    operation_id = "submitContact",
    security([])
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<Contact>> {
    let input = NewContact::try_from(payload.into_inner()).map_err(map_form_validation_error)?;
    let contact = state.contacts.create(input).await?;
    Ok(web::Json(contact))
}
