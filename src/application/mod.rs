//! Application layer: use-case orchestration over the domain traits

pub mod admin;
pub mod announcements;
pub mod catalog;
pub mod enrollment;
pub mod identity;

#[cfg(test)]
pub mod test_support;

pub use admin::{AdminUserService, UserWithEnrollments};
pub use announcements::AnnouncementService;
pub use catalog::CatalogService;
pub use enrollment::EnrollmentService;
pub use identity::{AuthSession, GoogleProfile, IdTokenVerifier, IdentityService};
