//! SeaORM-backed repository implementations

pub mod announcement_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod user_repository;

pub use announcement_repository::AnnouncementRepository;
pub use course_repository::CourseRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use user_repository::UserRepository;
