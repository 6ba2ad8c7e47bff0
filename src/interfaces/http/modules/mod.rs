pub mod admin_users;
pub mod announcements;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod users;
