//! Admin console service: user oversight

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    AccountStatus, Enrollment, EnrollmentRepositoryInterface, User, UserRepositoryInterface,
};
use crate::shared::{DomainError, DomainResult};

/// A user joined with their bookings, as shown on the admin user table.
#[derive(Clone, Debug)]
pub struct UserWithEnrollments {
    pub user: User,
    pub enrollments: Vec<Enrollment>,
}

/// Admin user service: listing and account status toggling.
pub struct AdminUserService<U, E>
where
    U: UserRepositoryInterface,
    E: EnrollmentRepositoryInterface,
{
    users: Arc<U>,
    enrollments: Arc<E>,
}

impl<U, E> AdminUserService<U, E>
where
    U: UserRepositoryInterface,
    E: EnrollmentRepositoryInterface,
{
    pub fn new(users: Arc<U>, enrollments: Arc<E>) -> Self {
        Self { users, enrollments }
    }

    /// All users with their enrollments attached.
    pub async fn list_users(&self) -> DomainResult<Vec<UserWithEnrollments>> {
        let users = self.users.list_users().await?;

        let mut out = Vec::with_capacity(users.len());
        for user in users {
            let enrollments = self.enrollments.list_for_user(user.id).await?;
            out.push(UserWithEnrollments { user, enrollments });
        }

        Ok(out)
    }

    /// Toggle a user's account status. Only ACTIVE and SUSPENDED exist.
    pub async fn update_account_status(&self, id: i64, status: &str) -> DomainResult<User> {
        let status = AccountStatus::parse(status).ok_or_else(|| {
            DomainError::Validation(format!(
                "Invalid accountStatus '{}', expected ACTIVE or SUSPENDED",
                status
            ))
        })?;

        let user = self
            .users
            .update_account_status(id, status)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        info!(user_id = user.id, status = %status, "Account status changed");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{InMemoryEnrollmentRepo, InMemoryUserRepo};
    use crate::domain::{CompletionStatus, CreateUserDto, NewEnrollment, UserRole};

    async fn setup() -> (
        AdminUserService<InMemoryUserRepo, InMemoryEnrollmentRepo>,
        i64,
    ) {
        let users = Arc::new(InMemoryUserRepo::new());
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

        enrollments
            .create_enrollment(NewEnrollment {
                user_id: user.id,
                course_id: 1,
                selected_course_title: "Rust 101".into(),
                completion_status: CompletionStatus::Enrolled,
                certificate_url: None,
                enrolled_date: chrono::Utc::now().date_naive(),
            })
            .await
            .unwrap();

        (AdminUserService::new(users, enrollments), user.id)
    }

    #[tokio::test]
    async fn listing_attaches_enrollments() {
        let (svc, user_id) = setup().await;

        let listed = svc.list_users().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user.id, user_id);
        assert_eq!(listed[0].enrollments.len(), 1);
    }

    #[tokio::test]
    async fn status_toggle_round_trips() {
        let (svc, user_id) = setup().await;

        let suspended = svc
            .update_account_status(user_id, "SUSPENDED")
            .await
            .unwrap();
        assert_eq!(suspended.account_status, AccountStatus::Suspended);

        let active = svc.update_account_status(user_id, "ACTIVE").await.unwrap();
        assert_eq!(active.account_status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn unknown_status_is_rejected() {
        let (svc, user_id) = setup().await;

        let err = svc
            .update_account_status(user_id, "BANNED")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (svc, _) = setup().await;

        let err = svc.update_account_status(999, "ACTIVE").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
