//! Enrollment aggregate (user-selected courses)

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::BookCourseDto;
pub use model::{CompletionStatus, Enrollment};
pub use repository::{EnrollmentRepositoryInterface, NewEnrollment};
