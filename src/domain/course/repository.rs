use async_trait::async_trait;

use super::{Course, CourseInputDto};
use crate::shared::DomainResult;

#[async_trait]
pub trait CourseRepositoryInterface: Send + Sync {
    async fn list_courses(&self) -> DomainResult<Vec<Course>>;
    async fn get_course_by_id(&self, id: i64) -> DomainResult<Option<Course>>;
    async fn create_course(&self, dto: CourseInputDto) -> DomainResult<Course>;
    async fn update_course(&self, id: i64, dto: CourseInputDto) -> DomainResult<Option<Course>>;
    async fn delete_course(&self, id: i64) -> DomainResult<()>;
}
