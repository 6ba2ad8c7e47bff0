//! Announcement DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AnnouncementWithCount, CreateAnnouncementDto, RecipientInfo};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    /// "ALL" | "USERS" | "BATCH"
    pub target: String,
    /// Required when target == USERS
    pub user_ids: Option<Vec<i64>>,
    /// Required when target == BATCH
    pub batch_id: Option<String>,
}

impl CreateAnnouncementRequest {
    pub fn into_dto(self, created_by: Option<i64>) -> CreateAnnouncementDto {
        CreateAnnouncementDto {
            title: self.title,
            message: self.message,
            target: self.target,
            user_ids: self.user_ids,
            batch_id: self.batch_id,
            created_by,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub target: String,
    pub batch_id: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub recipient_count: u64,
}

impl From<AnnouncementWithCount> for AnnouncementDto {
    fn from(row: AnnouncementWithCount) -> Self {
        let a = row.announcement;
        Self {
            id: a.id,
            title: a.title,
            message: a.message,
            target: a.target_type.as_str().to_string(),
            batch_id: a.batch_id,
            created_by: a.created_by,
            created_at: a.created_at,
            recipient_count: row.recipient_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDto {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub batch_id: Option<String>,
    pub status: String,
}

impl From<RecipientInfo> for RecipientDto {
    fn from(info: RecipientInfo) -> Self {
        Self {
            user_id: info.user_id,
            full_name: info.full_name,
            email: info.email,
            batch_id: info.batch_id,
            status: info.status.as_str().to_string(),
        }
    }
}
