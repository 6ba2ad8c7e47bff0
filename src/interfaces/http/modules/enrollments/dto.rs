//! Enrollment DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{BookCourseDto, CompletionStatus, Enrollment};
use crate::shared::{DomainError, DomainResult};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub selected_course_title: String,
    pub completion_status: String,
    pub certificate_url: Option<String>,
    pub enrolled_date: NaiveDate,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            selected_course_title: enrollment.selected_course_title,
            completion_status: enrollment.completion_status.as_str().to_string(),
            certificate_url: enrollment.certificate_url,
            enrolled_date: enrollment.enrolled_date,
        }
    }
}

/// Booking request from the course detail screen
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCourseRequest {
    pub user_id: i64,
    pub course_id: i64,
    /// "ENROLLED" | "IN_PROGRESS" | "COMPLETED", defaults to ENROLLED
    pub completion_status: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub selected_course_title: Option<String>,
    pub certificate_url: Option<String>,
    pub enrolled_date: Option<NaiveDate>,
}

impl BookCourseRequest {
    pub fn into_dto(self) -> DomainResult<BookCourseDto> {
        let completion_status = match self.completion_status {
            Some(ref s) => Some(CompletionStatus::parse(s).ok_or_else(|| {
                DomainError::Validation(format!(
                    "Invalid completionStatus '{}', expected ENROLLED, IN_PROGRESS or COMPLETED",
                    s
                ))
            })?),
            None => None,
        };

        Ok(BookCourseDto {
            user_id: self.user_id,
            course_id: self.course_id,
            completion_status,
            selected_course_title: self.selected_course_title,
            certificate_url: self.certificate_url,
            enrolled_date: self.enrolled_date,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CertificateParams {
    /// Where the issued certificate is hosted
    pub certificate_url: String,
}
