//! Course catalog module: public listing, admin CRUD

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
