use async_trait::async_trait;
use chrono::NaiveDate;

use super::{CompletionStatus, Enrollment};
use crate::shared::DomainResult;

/// Fully-resolved insert payload (validation happens in the service layer)
#[derive(Debug, Clone)]
pub struct NewEnrollment {
    pub user_id: i64,
    pub course_id: i64,
    pub selected_course_title: String,
    pub completion_status: CompletionStatus,
    pub certificate_url: Option<String>,
    pub enrolled_date: NaiveDate,
}

#[async_trait]
pub trait EnrollmentRepositoryInterface: Send + Sync {
    async fn create_enrollment(&self, row: NewEnrollment) -> DomainResult<Enrollment>;

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<Enrollment>>;
    async fn find_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> DomainResult<Option<Enrollment>>;

    async fn delete_by_user_and_course(&self, user_id: i64, course_id: i64)
        -> DomainResult<bool>;

    async fn set_certificate_url(
        &self,
        enrollment_id: i64,
        certificate_url: &str,
    ) -> DomainResult<Option<Enrollment>>;

    async fn set_completion_status(
        &self,
        enrollment_id: i64,
        status: CompletionStatus,
    ) -> DomainResult<Option<Enrollment>>;
}
