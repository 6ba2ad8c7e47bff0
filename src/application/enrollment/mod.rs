//! Course booking use-cases

pub mod service;

pub use service::EnrollmentService;
