//! Authentication module: login, register, Google sign-in, verification

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
