use async_trait::async_trait;

use super::{AccountStatus, CreateUserDto, UpdateIdsDto, UpdateProfileDto, User};
use crate::shared::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_id(&self, id: i64) -> DomainResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_verification_token(&self, token: &str) -> DomainResult<Option<User>>;

    async fn list_users(&self) -> DomainResult<Vec<User>>;
    async fn list_users_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<User>>;
    async fn list_users_by_batch(&self, batch_id: &str) -> DomainResult<Vec<User>>;

    async fn update_profile(&self, id: i64, dto: UpdateProfileDto) -> DomainResult<Option<User>>;
    async fn update_ids(&self, id: i64, dto: UpdateIdsDto) -> DomainResult<Option<User>>;
    async fn update_account_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> DomainResult<Option<User>>;
    async fn mark_verified(&self, id: i64) -> DomainResult<()>;
}
