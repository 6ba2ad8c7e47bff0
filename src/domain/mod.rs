//! Core business entities, DTOs and repository traits

pub mod announcement;
pub mod course;
pub mod enrollment;
pub mod user;

pub use announcement::{
    Announcement, AnnouncementRepositoryInterface, AnnouncementWithCount, CreateAnnouncementDto,
    NewAnnouncement, RecipientInfo, RecipientStatus, TargetType,
};
pub use course::{Course, CourseInputDto, CourseRepositoryInterface, DeliveryMode, SkillLevel};
pub use enrollment::{
    BookCourseDto, CompletionStatus, Enrollment, EnrollmentRepositoryInterface, NewEnrollment,
};
pub use user::{
    AccountStatus, CreateUserDto, UpdateIdsDto, UpdateProfileDto, User, UserRepositoryInterface,
    UserRole,
};
