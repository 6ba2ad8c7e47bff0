use chrono::NaiveDate;

use super::CompletionStatus;

/// Booking request, as submitted by the course detail screen
#[derive(Debug, Clone)]
pub struct BookCourseDto {
    pub user_id: i64,
    pub course_id: i64,
    pub completion_status: Option<CompletionStatus>,
    /// Title override; defaults to the course's current title
    pub selected_course_title: Option<String>,
    pub certificate_url: Option<String>,
    pub enrolled_date: Option<NaiveDate>,
}
