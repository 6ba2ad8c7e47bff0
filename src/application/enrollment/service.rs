//! Enrollment service: booking and progress tracking

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{
    BookCourseDto, CompletionStatus, CourseRepositoryInterface, Enrollment,
    EnrollmentRepositoryInterface, NewEnrollment, UserRepositoryInterface,
};
use crate::shared::{DomainError, DomainResult};

/// Enrollment service: books courses for students and tracks completion.
pub struct EnrollmentService<U, C, E>
where
    U: UserRepositoryInterface,
    C: CourseRepositoryInterface,
    E: EnrollmentRepositoryInterface,
{
    users: Arc<U>,
    courses: Arc<C>,
    enrollments: Arc<E>,
}

impl<U, C, E> EnrollmentService<U, C, E>
where
    U: UserRepositoryInterface,
    C: CourseRepositoryInterface,
    E: EnrollmentRepositoryInterface,
{
    pub fn new(users: Arc<U>, courses: Arc<C>, enrollments: Arc<E>) -> Self {
        Self {
            users,
            courses,
            enrollments,
        }
    }

    /// Book a course for a student.
    ///
    /// The booking title defaults to the course's current title and the
    /// enrollment date to today. Duplicate bookings are rejected.
    pub async fn book_course(&self, dto: BookCourseDto) -> DomainResult<Enrollment> {
        let user = self
            .users
            .get_user_by_id(dto.user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: dto.user_id.to_string(),
            })?;

        let course = self
            .courses
            .get_course_by_id(dto.course_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Course",
                field: "id",
                value: dto.course_id.to_string(),
            })?;

        if self
            .enrollments
            .find_by_user_and_course(user.id, course.id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "User has already enrolled in this course".into(),
            ));
        }

        let row = NewEnrollment {
            user_id: user.id,
            course_id: course.id,
            selected_course_title: dto
                .selected_course_title
                .unwrap_or_else(|| course.title.clone()),
            completion_status: dto.completion_status.unwrap_or_default(),
            certificate_url: dto.certificate_url,
            enrolled_date: dto.enrolled_date.unwrap_or_else(|| Utc::now().date_naive()),
        };

        let enrollment = self.enrollments.create_enrollment(row).await?;
        info!(
            user_id = enrollment.user_id,
            course_id = enrollment.course_id,
            "Course booked"
        );
        Ok(enrollment)
    }

    /// All enrollments of a user, for the dashboard and the admin screens.
    pub async fn list_for_user(&self, user_id: i64) -> DomainResult<Vec<Enrollment>> {
        self.enrollments.list_for_user(user_id).await
    }

    /// Remove a booking. Missing bookings are a NotFound, not a no-op.
    pub async fn unenroll(&self, user_id: i64, course_id: i64) -> DomainResult<()> {
        let deleted = self
            .enrollments
            .delete_by_user_and_course(user_id, course_id)
            .await?;

        if !deleted {
            return Err(DomainError::NotFound {
                entity: "Enrollment",
                field: "course_id",
                value: course_id.to_string(),
            });
        }

        info!(user_id, course_id, "Enrollment removed");
        Ok(())
    }

    /// Attach a certificate URL and mark the enrollment completed.
    pub async fn set_certificate_url(
        &self,
        enrollment_id: i64,
        certificate_url: &str,
    ) -> DomainResult<Enrollment> {
        if certificate_url.trim().is_empty() {
            return Err(DomainError::Validation(
                "certificateUrl must not be empty".into(),
            ));
        }

        self.enrollments
            .set_certificate_url(enrollment_id, certificate_url)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Enrollment",
                field: "id",
                value: enrollment_id.to_string(),
            })?;

        // A certificate implies the course is finished
        let enrollment = self
            .enrollments
            .set_completion_status(enrollment_id, CompletionStatus::Completed)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Enrollment",
                field: "id",
                value: enrollment_id.to_string(),
            })?;

        info!(enrollment_id, "Certificate attached");
        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryCourseRepo, InMemoryEnrollmentRepo, InMemoryUserRepo,
    };
    use crate::domain::{CourseInputDto, CreateUserDto, DeliveryMode, SkillLevel, UserRole};

    async fn setup() -> (
        EnrollmentService<InMemoryUserRepo, InMemoryCourseRepo, InMemoryEnrollmentRepo>,
        i64,
        i64,
    ) {
        let users = Arc::new(InMemoryUserRepo::new());
        let courses = Arc::new(InMemoryCourseRepo::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepo::new());

        let user = users
            .create_user(CreateUserDto {
                full_name: "Jane Perera".into(),
                email: "jane@example.com".into(),
                password_hash: Some("hash".into()),
                role: Some(UserRole::Student),
                is_verified: true,
                verification_token: None,
            })
            .await
            .unwrap();

        let course = courses
            .create_course(CourseInputDto {
                title: "Rust 101".into(),
                description: "Intro".into(),
                image: None,
                mode: DeliveryMode::Online,
                level: SkillLevel::Beginner,
                price: "Free".into(),
                rating: 0.0,
                reviews: 0,
                total_participants: 0,
                certificate_providers: None,
                promo_code: None,
                demo_certificate: None,
            })
            .await
            .unwrap();

        (
            EnrollmentService::new(users, courses, enrollments),
            user.id,
            course.id,
        )
    }

    fn booking(user_id: i64, course_id: i64) -> BookCourseDto {
        BookCourseDto {
            user_id,
            course_id,
            completion_status: None,
            selected_course_title: None,
            certificate_url: None,
            enrolled_date: None,
        }
    }

    #[tokio::test]
    async fn booking_defaults_title_and_status() {
        let (svc, user_id, course_id) = setup().await;

        let enrollment = svc.book_course(booking(user_id, course_id)).await.unwrap();
        assert_eq!(enrollment.selected_course_title, "Rust 101");
        assert_eq!(enrollment.completion_status, CompletionStatus::Enrolled);
        assert_eq!(svc.list_for_user(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_booking_conflicts() {
        let (svc, user_id, course_id) = setup().await;

        svc.book_course(booking(user_id, course_id)).await.unwrap();
        let err = svc
            .book_course(booking(user_id, course_id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(svc.list_for_user(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn booking_unknown_user_or_course_is_not_found() {
        let (svc, user_id, course_id) = setup().await;

        let err = svc.book_course(booking(999, course_id)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc.book_course(booking(user_id, 999)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn unenroll_removes_booking_once() {
        let (svc, user_id, course_id) = setup().await;

        svc.book_course(booking(user_id, course_id)).await.unwrap();
        svc.unenroll(user_id, course_id).await.unwrap();
        assert!(svc.list_for_user(user_id).await.unwrap().is_empty());

        let err = svc.unenroll(user_id, course_id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn certificate_marks_enrollment_completed() {
        let (svc, user_id, course_id) = setup().await;

        let enrollment = svc.book_course(booking(user_id, course_id)).await.unwrap();
        let updated = svc
            .set_certificate_url(enrollment.id, "https://certs.example.com/1")
            .await
            .unwrap();

        assert_eq!(
            updated.certificate_url.as_deref(),
            Some("https://certs.example.com/1")
        );
        assert_eq!(updated.completion_status, CompletionStatus::Completed);
    }
}
