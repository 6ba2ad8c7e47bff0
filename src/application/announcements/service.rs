//! Announcement service: admin broadcasts with materialized recipients

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    Announcement, AnnouncementRepositoryInterface, AnnouncementWithCount, CreateAnnouncementDto,
    NewAnnouncement, RecipientInfo, TargetType, UserRepositoryInterface,
};
use crate::shared::{DomainError, DomainResult};

/// Announcement service: resolves targets to users at creation time.
///
/// Recipient rows are materialized when the announcement is created, so the
/// audience is frozen: users added to a batch later do not see old posts.
pub struct AnnouncementService<A, U>
where
    A: AnnouncementRepositoryInterface,
    U: UserRepositoryInterface,
{
    announcements: Arc<A>,
    users: Arc<U>,
}

impl<A, U> AnnouncementService<A, U>
where
    A: AnnouncementRepositoryInterface,
    U: UserRepositoryInterface,
{
    pub fn new(announcements: Arc<A>, users: Arc<U>) -> Self {
        Self {
            announcements,
            users,
        }
    }

    async fn resolve_recipients(&self, dto: &CreateAnnouncementDto) -> DomainResult<Vec<i64>> {
        let target = TargetType::parse(&dto.target).ok_or_else(|| {
            DomainError::Validation(format!(
                "Invalid target '{}', expected ALL, USERS or BATCH",
                dto.target
            ))
        })?;

        let ids = match target {
            TargetType::All => self
                .users
                .list_users()
                .await?
                .into_iter()
                .map(|u| u.id)
                .collect::<Vec<_>>(),
            TargetType::Users => {
                let ids = dto.user_ids.clone().unwrap_or_default();
                if ids.is_empty() {
                    return Err(DomainError::Validation(
                        "Target USERS requires a non-empty userIds list".into(),
                    ));
                }
                self.users
                    .list_users_by_ids(&ids)
                    .await?
                    .into_iter()
                    .map(|u| u.id)
                    .collect()
            }
            TargetType::Batch => {
                let batch_id = dto.batch_id.as_deref().filter(|b| !b.is_empty()).ok_or_else(
                    || DomainError::Validation("Target BATCH requires a batchId".into()),
                )?;
                self.users
                    .list_users_by_batch(batch_id)
                    .await?
                    .into_iter()
                    .map(|u| u.id)
                    .collect()
            }
        };

        if ids.is_empty() {
            return Err(DomainError::Validation(
                "Announcement resolved to zero recipients".into(),
            ));
        }

        Ok(ids)
    }

    /// Create an announcement and materialize one recipient row per user.
    pub async fn create(&self, dto: CreateAnnouncementDto) -> DomainResult<AnnouncementWithCount> {
        if dto.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".into()));
        }
        if dto.message.trim().is_empty() {
            return Err(DomainError::Validation("Message is required".into()));
        }

        let recipient_ids = self.resolve_recipients(&dto).await?;
        // parse() already succeeded inside resolve_recipients
        let target_type = TargetType::parse(&dto.target).unwrap_or(TargetType::All);

        let announcement = self
            .announcements
            .create_announcement(NewAnnouncement {
                title: dto.title,
                message: dto.message,
                target_type,
                batch_id: match target_type {
                    TargetType::Batch => dto.batch_id,
                    _ => None,
                },
                created_by: dto.created_by,
            })
            .await?;

        self.announcements
            .add_recipients(announcement.id, &recipient_ids)
            .await?;

        info!(
            announcement_id = announcement.id,
            target = target_type.as_str(),
            recipients = recipient_ids.len(),
            "Announcement published"
        );

        Ok(AnnouncementWithCount {
            announcement,
            recipient_count: recipient_ids.len() as u64,
        })
    }

    pub async fn list_all(&self) -> DomainResult<Vec<AnnouncementWithCount>> {
        self.announcements.list_announcements().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Announcement> {
        self.announcements
            .get_announcement_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Announcement",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn recipients(&self, id: i64) -> DomainResult<Vec<RecipientInfo>> {
        // 404 before an empty recipient list for unknown ids
        self.get_by_id(id).await?;
        self.announcements.list_recipients(id).await
    }

    /// Feed for a student: announcements addressed to them, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<AnnouncementWithCount>> {
        self.announcements.list_for_user(user_id).await
    }

    /// Delete an announcement together with its recipient rows.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.announcements.delete_announcement(id).await?;
        info!(announcement_id = id, "Announcement deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryAnnouncementRepo, InMemoryUserRepo};
    use crate::domain::{CreateUserDto, UpdateIdsDto, UserRole};

    async fn add_user(users: &InMemoryUserRepo, email: &str, batch: Option<&str>) -> i64 {
        let user = users
            .create_user(CreateUserDto {
                full_name: email.to_string(),
                email: email.to_string(),
                password_hash: Some("hash".into()),
                role: Some(UserRole::Student),
                is_verified: true,
                verification_token: None,
            })
            .await
            .unwrap();
        if let Some(batch) = batch {
            users
                .update_ids(
                    user.id,
                    UpdateIdsDto {
                        student_id: None,
                        batch_id: Some(batch.into()),
                    },
                )
                .await
                .unwrap();
        }
        user.id
    }

    fn dto(target: &str) -> CreateAnnouncementDto {
        CreateAnnouncementDto {
            title: "Exam schedule".into(),
            message: "Finals start Monday".into(),
            target: target.into(),
            user_ids: None,
            batch_id: None,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn all_target_reaches_every_user() {
        let users = Arc::new(InMemoryUserRepo::new());
        add_user(&users, "a@example.com", None).await;
        add_user(&users, "b@example.com", Some("2026A")).await;

        let repo = Arc::new(InMemoryAnnouncementRepo::new());
        let svc = AnnouncementService::new(repo.clone(), users);

        let created = svc.create(dto("ALL")).await.unwrap();
        assert_eq!(created.recipient_count, 2);
        assert_eq!(repo.recipient_ids(created.announcement.id).len(), 2);
    }

    #[tokio::test]
    async fn batch_target_reaches_only_that_batch() {
        let users = Arc::new(InMemoryUserRepo::new());
        add_user(&users, "a@example.com", None).await;
        let b = add_user(&users, "b@example.com", Some("2026A")).await;

        let repo = Arc::new(InMemoryAnnouncementRepo::new());
        let svc = AnnouncementService::new(repo.clone(), users);

        let mut payload = dto("BATCH");
        payload.batch_id = Some("2026A".into());
        let created = svc.create(payload).await.unwrap();
        assert_eq!(repo.recipient_ids(created.announcement.id), vec![b]);

        let feed = svc.list_for_user(b).await.unwrap();
        assert_eq!(feed.len(), 1);
    }

    #[tokio::test]
    async fn users_target_requires_non_empty_ids() {
        let users = Arc::new(InMemoryUserRepo::new());
        add_user(&users, "a@example.com", None).await;

        let svc = AnnouncementService::new(Arc::new(InMemoryAnnouncementRepo::new()), users);

        let err = svc.create(dto("USERS")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let mut payload = dto("USERS");
        payload.user_ids = Some(vec![]);
        let err = svc.create(payload).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn zero_recipients_is_rejected() {
        let users = Arc::new(InMemoryUserRepo::new());
        let svc = AnnouncementService::new(Arc::new(InMemoryAnnouncementRepo::new()), users);

        let mut payload = dto("BATCH");
        payload.batch_id = Some("empty-batch".into());
        let err = svc.create(payload).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn invalid_target_is_rejected() {
        let users = Arc::new(InMemoryUserRepo::new());
        let svc = AnnouncementService::new(Arc::new(InMemoryAnnouncementRepo::new()), users);

        let err = svc.create(dto("EVERYONE")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_removes_recipients_too() {
        let users = Arc::new(InMemoryUserRepo::new());
        let a = add_user(&users, "a@example.com", None).await;

        let repo = Arc::new(InMemoryAnnouncementRepo::new());
        let svc = AnnouncementService::new(repo.clone(), users);

        let created = svc.create(dto("ALL")).await.unwrap();
        svc.delete(created.announcement.id).await.unwrap();

        assert!(repo.recipient_ids(created.announcement.id).is_empty());
        assert!(svc.list_for_user(a).await.unwrap().is_empty());

        let err = svc.delete(created.announcement.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
