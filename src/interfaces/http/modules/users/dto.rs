//! User-facing DTOs shared by the auth, users and admin modules

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// User as exposed over the API. Password hash and verification token
/// never leave the server.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub hometown: Option<String>,
    pub contact_number: Option<String>,
    pub status: Option<String>,
    pub nic: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub account_status: String,
    pub student_id: Option<String>,
    pub batch_id: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role.as_str().to_string(),
            hometown: user.hometown,
            contact_number: user.contact_number,
            status: user.status,
            nic: user.nic,
            sex: user.sex,
            date_of_birth: user.date_of_birth,
            account_status: user.account_status.as_str().to_string(),
            student_id: user.student_id,
            batch_id: user.batch_id,
            verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// Self-service profile edit; absent fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "fullName must be 1-100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 100))]
    pub hometown: Option<String>,
    #[validate(length(max = 50))]
    pub contact_number: Option<String>,
    #[validate(length(max = 100))]
    pub status: Option<String>,
    #[validate(length(max = 50))]
    pub nic: Option<String>,
    #[validate(length(max = 20))]
    pub sex: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Institutional identifiers, set from the admin console
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdsRequest {
    #[validate(length(min = 1, max = 50, message = "studentId must be 1-50 characters"))]
    pub student_id: Option<String>,
    #[validate(length(min = 1, max = 50, message = "batchId must be 1-50 characters"))]
    pub batch_id: Option<String>,
}
