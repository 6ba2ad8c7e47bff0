//! Announcement aggregate

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::CreateAnnouncementDto;
pub use model::{Announcement, RecipientInfo, RecipientStatus, TargetType};
pub use repository::{AnnouncementRepositoryInterface, AnnouncementWithCount, NewAnnouncement};
