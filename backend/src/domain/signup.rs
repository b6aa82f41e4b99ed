//! Prospective-client signup entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::validation::{
    FormValidationError, validate_non_empty_field, validate_non_empty_list,
};

/// A stored prospective-client signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub id: i32,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub phone: String,
    pub business_needs: Vec<String>,
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Signup {
    /// Assemble a stored record from validated input, a store-assigned id,
    /// and the creation timestamp.
    pub fn create(id: i32, input: NewSignup, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            company_name: input.company_name,
            company_size: input.company_size,
            industry: input.industry,
            full_name: input.full_name,
            email: input.email,
            position: input.position,
            phone: input.phone,
            business_needs: input.business_needs,
            additional_info: input.additional_info,
            created_at,
        }
    }
}

/// Validated input for [`Signup`] creation.
///
/// ## Invariants
/// - every required string field is non-empty once trimmed.
/// - `business_needs` contains at least one non-blank entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    company_name: String,
    company_size: String,
    industry: String,
    full_name: String,
    email: String,
    position: String,
    phone: String,
    business_needs: Vec<String>,
    additional_info: Option<String>,
}

impl NewSignup {
    /// Validate raw form values into a creation input.
    #[expect(clippy::too_many_arguments, reason = "mirrors the form field list")]
    pub fn try_new(
        company_name: String,
        company_size: String,
        industry: String,
        full_name: String,
        email: String,
        position: String,
        phone: String,
        business_needs: Vec<String>,
        additional_info: Option<String>,
    ) -> Result<Self, FormValidationError> {
        Ok(Self {
            company_name: validate_non_empty_field(company_name, "companyName")?,
            company_size: validate_non_empty_field(company_size, "companySize")?,
            industry: validate_non_empty_field(industry, "industry")?,
            full_name: validate_non_empty_field(full_name, "fullName")?,
            email: validate_non_empty_field(email, "email")?,
            position: validate_non_empty_field(position, "position")?,
            phone: validate_non_empty_field(phone, "phone")?,
            business_needs: validate_non_empty_list(business_needs, "businessNeeds")?,
            additional_info,
        })
    }
}
