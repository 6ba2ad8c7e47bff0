//! Course catalog service

use std::sync::Arc;

use tracing::info;

use crate::domain::{Course, CourseInputDto, CourseRepositoryInterface};
use crate::shared::{DomainError, DomainResult};

/// Catalog service: course CRUD for the public listing and the admin console.
pub struct CatalogService<R: CourseRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: CourseRepositoryInterface> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_courses(&self) -> DomainResult<Vec<Course>> {
        self.repo.list_courses().await
    }

    pub async fn get_course(&self, id: i64) -> DomainResult<Course> {
        self.repo
            .get_course_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Course",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn create_course(&self, dto: CourseInputDto) -> DomainResult<Course> {
        let course = self.repo.create_course(dto).await?;
        info!(course_id = course.id, title = %course.title, "Course created");
        Ok(course)
    }

    /// Full replace; every field comes from the payload.
    pub async fn update_course(&self, id: i64, dto: CourseInputDto) -> DomainResult<Course> {
        let course = self
            .repo
            .update_course(id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Course",
                field: "id",
                value: id.to_string(),
            })?;
        info!(course_id = course.id, "Course updated");
        Ok(course)
    }

    pub async fn delete_course(&self, id: i64) -> DomainResult<()> {
        self.repo.delete_course(id).await?;
        info!(course_id = id, "Course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryCourseRepo;
    use crate::domain::{DeliveryMode, SkillLevel};

    fn course_input(title: &str) -> CourseInputDto {
        CourseInputDto {
            title: title.into(),
            description: "Intro course".into(),
            image: None,
            mode: DeliveryMode::Online,
            level: SkillLevel::Beginner,
            price: "Free".into(),
            rating: 4.5,
            reviews: 10,
            total_participants: 100,
            certificate_providers: None,
            promo_code: None,
            demo_certificate: None,
        }
    }

    #[tokio::test]
    async fn create_list_update_delete_round_trip() {
        let svc = CatalogService::new(Arc::new(InMemoryCourseRepo::new()));

        let created = svc.create_course(course_input("Rust 101")).await.unwrap();
        assert_eq!(svc.list_courses().await.unwrap().len(), 1);

        let updated = svc
            .update_course(created.id, course_input("Rust 102"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Rust 102");

        svc.delete_course(created.id).await.unwrap();
        assert!(svc.list_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let svc = CatalogService::new(Arc::new(InMemoryCourseRepo::new()));

        let err = svc.get_course(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc
            .update_course(99, course_input("Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc.delete_course(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
