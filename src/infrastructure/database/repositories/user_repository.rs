use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    AccountStatus, CreateUserDto, UpdateIdsDto, UpdateProfileDto, User, UserRepositoryInterface,
    UserRole,
};
use crate::infrastructure::database::entities::user;
use crate::shared::{DomainError, DomainResult};

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Student => UserRole::Student,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Student => user::UserRole::Student,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn entity_status_to_domain(status: user::AccountStatus) -> AccountStatus {
    match status {
        user::AccountStatus::Active => AccountStatus::Active,
        user::AccountStatus::Suspended => AccountStatus::Suspended,
    }
}

fn domain_status_to_entity(status: AccountStatus) -> user::AccountStatus {
    match status {
        AccountStatus::Active => user::AccountStatus::Active,
        AccountStatus::Suspended => user::AccountStatus::Suspended,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        hometown: model.hometown,
        contact_number: model.contact_number,
        status: model.status,
        nic: model.nic,
        sex: model.sex,
        date_of_birth: model.date_of_birth,
        account_status: entity_status_to_domain(model.account_status),
        student_id: model.student_id,
        batch_id: model.batch_id,
        is_verified: model.is_verified,
        verification_token: model.verification_token,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();

        let role = dto.role.map_or(user::UserRole::Student, domain_role_to_entity);

        let new_user = user::ActiveModel {
            full_name: Set(dto.full_name),
            email: Set(dto.email),
            password_hash: Set(dto.password_hash),
            role: Set(role),
            hometown: Set(None),
            contact_number: Set(None),
            status: Set(None),
            nic: Set(None),
            sex: Set(None),
            date_of_birth: Set(None),
            account_status: Set(user::AccountStatus::Active),
            student_id: Set(None),
            batch_id: Set(None),
            is_verified: Set(dto.is_verified),
            verification_token: Set(dto.verification_token),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Email already in use".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(user_model_to_domain(inserted))
    }

    async fn get_user_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_verification_token(&self, token: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::VerificationToken.eq(token))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn list_users_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = user::Entity::find()
            .filter(user::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn list_users_by_batch(&self, batch_id: &str) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::BatchId.eq(batch_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn update_profile(&self, id: i64, dto: UpdateProfileDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();

        if let Some(full_name) = dto.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(hometown) = dto.hometown {
            active.hometown = Set(Some(hometown));
        }
        if let Some(contact_number) = dto.contact_number {
            active.contact_number = Set(Some(contact_number));
        }
        if let Some(status) = dto.status {
            active.status = Set(Some(status));
        }
        if let Some(nic) = dto.nic {
            active.nic = Set(Some(nic));
        }
        if let Some(sex) = dto.sex {
            active.sex = Set(Some(sex));
        }
        if let Some(date_of_birth) = dto.date_of_birth {
            active.date_of_birth = Set(Some(date_of_birth));
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn update_ids(&self, id: i64, dto: UpdateIdsDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();

        if let Some(student_id) = dto.student_id {
            active.student_id = Set(Some(student_id));
        }
        if let Some(batch_id) = dto.batch_id {
            active.batch_id = Set(Some(batch_id));
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn update_account_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        active.account_status = Set(domain_status_to_entity(status));
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn mark_verified(&self, id: i64) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: user::ActiveModel = existing.into();
        active.is_verified = Set(true);
        active.verification_token = Set(None);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }
}
