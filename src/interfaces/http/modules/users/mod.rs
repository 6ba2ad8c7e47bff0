//! User profile module: lookup by email, profile and identifier edits

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
