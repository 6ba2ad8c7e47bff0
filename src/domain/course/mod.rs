//! Course aggregate

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::CourseInputDto;
pub use model::{Course, DeliveryMode, SkillLevel};
pub use repository::CourseRepositoryInterface;
