use chrono::NaiveDate;

/// Progress of a booked course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Enrolled,
    InProgress,
    Completed,
}

impl Default for CompletionStatus {
    fn default() -> Self {
        Self::Enrolled
    }
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enrolled => "ENROLLED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ENROLLED" => Some(Self::Enrolled),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// User↔Course booking record
///
/// `selected_course_title` is denormalized at booking time so renames of the
/// catalog entry do not rewrite a student's history.
#[derive(Clone, Debug)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub selected_course_title: String,
    pub completion_status: CompletionStatus,
    pub certificate_url: Option<String>,
    pub enrolled_date: NaiveDate,
}
