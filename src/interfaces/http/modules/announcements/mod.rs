//! Announcement module: admin broadcasts and the student feed

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
