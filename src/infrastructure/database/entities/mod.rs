//! SeaORM entities

pub mod announcement;
pub mod announcement_recipient;
pub mod course;
pub mod enrollment;
pub mod user;
