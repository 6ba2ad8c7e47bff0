use async_trait::async_trait;

use super::{Announcement, RecipientInfo, TargetType};
use crate::shared::DomainResult;

/// Insert payload after target validation
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub target_type: TargetType,
    pub batch_id: Option<String>,
    pub created_by: Option<i64>,
}

/// An announcement together with its materialized recipient count
#[derive(Clone, Debug)]
pub struct AnnouncementWithCount {
    pub announcement: Announcement,
    pub recipient_count: u64,
}

#[async_trait]
pub trait AnnouncementRepositoryInterface: Send + Sync {
    async fn create_announcement(&self, row: NewAnnouncement) -> DomainResult<Announcement>;
    async fn add_recipients(&self, announcement_id: i64, user_ids: &[i64]) -> DomainResult<()>;

    async fn get_announcement_by_id(&self, id: i64) -> DomainResult<Option<Announcement>>;
    async fn list_announcements(&self) -> DomainResult<Vec<AnnouncementWithCount>>;
    async fn list_recipients(&self, announcement_id: i64) -> DomainResult<Vec<RecipientInfo>>;
    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<AnnouncementWithCount>>;

    /// Deletes the announcement and its recipient rows
    async fn delete_announcement(&self, id: i64) -> DomainResult<()>;
}
