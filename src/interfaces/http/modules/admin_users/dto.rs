//! Admin user-management DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::super::enrollments::dto::EnrollmentDto;
use super::super::users::dto::UserDto;
use crate::application::admin::UserWithEnrollments;

/// Row of the admin user table: profile plus booked courses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub enrolled_courses: Vec<EnrollmentDto>,
}

impl From<UserWithEnrollments> for AdminUserDto {
    fn from(row: UserWithEnrollments) -> Self {
        Self {
            user: UserDto::from(row.user),
            enrolled_courses: row
                .enrollments
                .into_iter()
                .map(EnrollmentDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatusParams {
    /// "ACTIVE" | "SUSPENDED"
    pub account_status: String,
}
