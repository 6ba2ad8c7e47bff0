//! Admin user oversight module: listing, suspension

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
