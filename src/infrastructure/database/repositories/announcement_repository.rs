use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    Announcement, AnnouncementRepositoryInterface, AnnouncementWithCount, NewAnnouncement,
    RecipientInfo, RecipientStatus, TargetType,
};
use crate::infrastructure::database::entities::{announcement, announcement_recipient, user};
use crate::shared::{DomainError, DomainResult};

pub struct AnnouncementRepository {
    db: DatabaseConnection,
}

impl AnnouncementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn recipient_count(&self, announcement_id: i64) -> DomainResult<u64> {
        announcement_recipient::Entity::find()
            .filter(announcement_recipient::Column::AnnouncementId.eq(announcement_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_target_to_domain(target: announcement::TargetType) -> TargetType {
    match target {
        announcement::TargetType::All => TargetType::All,
        announcement::TargetType::Users => TargetType::Users,
        announcement::TargetType::Batch => TargetType::Batch,
    }
}

fn domain_target_to_entity(target: TargetType) -> announcement::TargetType {
    match target {
        TargetType::All => announcement::TargetType::All,
        TargetType::Users => announcement::TargetType::Users,
        TargetType::Batch => announcement::TargetType::Batch,
    }
}

fn entity_recipient_status_to_domain(
    status: announcement_recipient::RecipientStatus,
) -> RecipientStatus {
    match status {
        announcement_recipient::RecipientStatus::Unread => RecipientStatus::Unread,
        announcement_recipient::RecipientStatus::Read => RecipientStatus::Read,
    }
}

fn announcement_model_to_domain(model: announcement::Model) -> Announcement {
    Announcement {
        id: model.id,
        title: model.title,
        message: model.message,
        target_type: entity_target_to_domain(model.target_type),
        batch_id: model.batch_id,
        created_by: model.created_by,
        created_at: model.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl AnnouncementRepositoryInterface for AnnouncementRepository {
    async fn create_announcement(&self, row: NewAnnouncement) -> DomainResult<Announcement> {
        let new_row = announcement::ActiveModel {
            title: Set(row.title),
            message: Set(row.message),
            target_type: Set(domain_target_to_entity(row.target_type)),
            batch_id: Set(row.batch_id),
            created_by: Set(row.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = new_row.insert(&self.db).await.map_err(db_err)?;

        Ok(announcement_model_to_domain(inserted))
    }

    async fn add_recipients(&self, announcement_id: i64, user_ids: &[i64]) -> DomainResult<()> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let rows = user_ids.iter().map(|user_id| announcement_recipient::ActiveModel {
            announcement_id: Set(announcement_id),
            user_id: Set(*user_id),
            status: Set(announcement_recipient::RecipientStatus::Unread),
            ..Default::default()
        });

        announcement_recipient::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn get_announcement_by_id(&self, id: i64) -> DomainResult<Option<Announcement>> {
        let model = announcement::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(announcement_model_to_domain))
    }

    async fn list_announcements(&self) -> DomainResult<Vec<AnnouncementWithCount>> {
        let models = announcement::Entity::find()
            .order_by_desc(announcement::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            let recipient_count = self.recipient_count(model.id).await?;
            out.push(AnnouncementWithCount {
                announcement: announcement_model_to_domain(model),
                recipient_count,
            });
        }

        Ok(out)
    }

    async fn list_recipients(&self, announcement_id: i64) -> DomainResult<Vec<RecipientInfo>> {
        let rows = announcement_recipient::Entity::find()
            .filter(announcement_recipient::Column::AnnouncementId.eq(announcement_id))
            .find_also_related(user::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut out = Vec::with_capacity(rows.len());
        for (recipient, maybe_user) in rows {
            // Recipient rows cascade on user delete, a missing join is a stale read
            let Some(user) = maybe_user else {
                continue;
            };
            out.push(RecipientInfo {
                user_id: user.id,
                full_name: user.full_name,
                email: user.email,
                batch_id: user.batch_id,
                status: entity_recipient_status_to_domain(recipient.status),
            });
        }

        Ok(out)
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<AnnouncementWithCount>> {
        let rows = announcement_recipient::Entity::find()
            .filter(announcement_recipient::Column::UserId.eq(user_id))
            .find_also_related(announcement::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut items: Vec<Announcement> = rows
            .into_iter()
            .filter_map(|(_, maybe_announcement)| maybe_announcement)
            .map(announcement_model_to_domain)
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let recipient_count = self.recipient_count(item.id).await?;
            out.push(AnnouncementWithCount {
                announcement: item,
                recipient_count,
            });
        }

        Ok(out)
    }

    async fn delete_announcement(&self, id: i64) -> DomainResult<()> {
        // Recipients first, SQLite does not always enforce cascades
        announcement_recipient::Entity::delete_many()
            .filter(announcement_recipient::Column::AnnouncementId.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let result = announcement::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Announcement",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
