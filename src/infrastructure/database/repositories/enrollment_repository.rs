use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    CompletionStatus, Enrollment, EnrollmentRepositoryInterface, NewEnrollment,
};
use crate::infrastructure::database::entities::enrollment;
use crate::shared::{DomainError, DomainResult};

pub struct EnrollmentRepository {
    db: DatabaseConnection,
}

impl EnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: enrollment::CompletionStatus) -> CompletionStatus {
    match status {
        enrollment::CompletionStatus::Enrolled => CompletionStatus::Enrolled,
        enrollment::CompletionStatus::InProgress => CompletionStatus::InProgress,
        enrollment::CompletionStatus::Completed => CompletionStatus::Completed,
    }
}

fn domain_status_to_entity(status: CompletionStatus) -> enrollment::CompletionStatus {
    match status {
        CompletionStatus::Enrolled => enrollment::CompletionStatus::Enrolled,
        CompletionStatus::InProgress => enrollment::CompletionStatus::InProgress,
        CompletionStatus::Completed => enrollment::CompletionStatus::Completed,
    }
}

fn enrollment_model_to_domain(model: enrollment::Model) -> Enrollment {
    Enrollment {
        id: model.id,
        user_id: model.user_id,
        course_id: model.course_id,
        selected_course_title: model.selected_course_title,
        completion_status: entity_status_to_domain(model.completion_status),
        certificate_url: model.certificate_url,
        enrolled_date: model.enrolled_date,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl EnrollmentRepositoryInterface for EnrollmentRepository {
    async fn create_enrollment(&self, row: NewEnrollment) -> DomainResult<Enrollment> {
        let new_row = enrollment::ActiveModel {
            user_id: Set(row.user_id),
            course_id: Set(row.course_id),
            selected_course_title: Set(row.selected_course_title),
            completion_status: Set(domain_status_to_entity(row.completion_status)),
            certificate_url: Set(row.certificate_url),
            enrolled_date: Set(row.enrolled_date),
            ..Default::default()
        };

        // The unique (user_id, course_id) index catches racing duplicate bookings
        let inserted = new_row.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("User has already enrolled in this course".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(enrollment_model_to_domain(inserted))
    }

    async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_desc(enrollment::Column::EnrolledDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models
            .into_iter()
            .map(enrollment_model_to_domain)
            .collect())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> DomainResult<Option<Enrollment>> {
        let model = enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(enrollment_model_to_domain))
    }

    async fn delete_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> DomainResult<bool> {
        let result = enrollment::Entity::delete_many()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn set_certificate_url(
        &self,
        enrollment_id: i64,
        certificate_url: &str,
    ) -> DomainResult<Option<Enrollment>> {
        let existing = enrollment::Entity::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: enrollment::ActiveModel = existing.into();
        active.certificate_url = Set(Some(certificate_url.to_string()));

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(enrollment_model_to_domain(updated)))
    }

    async fn set_completion_status(
        &self,
        enrollment_id: i64,
        status: CompletionStatus,
    ) -> DomainResult<Option<Enrollment>> {
        let existing = enrollment::Entity::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: enrollment::ActiveModel = existing.into();
        active.completion_status = Set(domain_status_to_entity(status));

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(enrollment_model_to_domain(updated)))
    }
}
