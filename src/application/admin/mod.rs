//! Admin console use-cases

pub mod service;

pub use service::{AdminUserService, UserWithEnrollments};
