//! # EduHub Service
//!
//! Backend for the EduHub learning platform: accounts with local and
//! Google sign-in, a course catalog, enrollments with certificates,
//! and admin announcements.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, DTOs and repository traits
//! - **application**: Business logic and use-case services
//! - **infrastructure**: External concerns (database, password hashing, JWT, Google)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types used across layers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
