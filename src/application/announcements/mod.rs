//! Broadcast announcement use-cases

pub mod service;

pub use service::AnnouncementService;
