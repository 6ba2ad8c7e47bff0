//! Identity service: authentication and self-service account management
//!
//! All auth business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{
    CreateUserDto, UpdateIdsDto, UpdateProfileDto, User, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::{DomainError, DomainResult};

/// Profile extracted from a verified Google ID token
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    pub email: String,
    pub full_name: Option<String>,
}

/// Seam for ID-token verification so the service stays testable offline
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> DomainResult<GoogleProfile>;
}

/// Authenticated session returned by login, register and Google sign-in
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Identity service: orchestrates login, registration and profile edits.
///
/// Generic over `R: UserRepositoryInterface` and `V: IdTokenVerifier` so it
/// stays decoupled from persistence and from Google's endpoints.
pub struct IdentityService<R: UserRepositoryInterface, V: IdTokenVerifier> {
    repo: Arc<R>,
    verifier: Arc<V>,
    jwt_config: JwtConfig,
}

impl<R: UserRepositoryInterface, V: IdTokenVerifier> IdentityService<R, V> {
    pub fn new(repo: Arc<R>, verifier: Arc<V>, jwt_config: JwtConfig) -> Self {
        Self {
            repo,
            verifier,
            jwt_config,
        }
    }

    fn issue_session(&self, user: User) -> DomainResult<AuthSession> {
        let token = create_token(user.id, &user.email, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("Failed to create token: {}", e)))?;

        Ok(AuthSession {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_days * 86400,
            user,
        })
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a session token.
    ///
    /// Suspended accounts still authenticate; the client decides what a
    /// suspended session may do.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let user = self.repo.get_user_by_email(email).await?;

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid email or password".into()));
        };

        // Google-created accounts have no password hash
        let Some(ref hash) = user.password_hash else {
            return Err(DomainError::Unauthorized("Invalid email or password".into()));
        };

        let valid = verify_password(password, hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid email or password".into()));
        }

        self.issue_session(user)
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new student account and return an authenticated session.
    ///
    /// A verification token is generated and handed to the mail pipeline;
    /// the session is issued immediately, before the email is confirmed.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthSession> {
        if full_name.trim().is_empty() {
            return Err(DomainError::Validation("Full name is required".into()));
        }
        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".into(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }

        if self.repo.get_user_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        let verification_token = uuid::Uuid::new_v4().simple().to_string();

        let user = self
            .repo
            .create_user(CreateUserDto {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password_hash: Some(password_hash),
                role: Some(UserRole::Student),
                is_verified: false,
                verification_token: Some(verification_token.clone()),
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        // Mail delivery is handled out of process; the token only leaves
        // through the mail pipeline, never through the API response.
        info!(user_id = user.id, token = %verification_token, "Verification token issued");

        self.issue_session(user)
    }

    // ── Google sign-in ──────────────────────────────────────────

    /// Exchange a Google ID token for a local session.
    ///
    /// First sign-in creates a passwordless, pre-verified account.
    pub async fn google_login(&self, id_token: &str) -> DomainResult<AuthSession> {
        let profile = self.verifier.verify(id_token).await?;

        let user = match self.repo.get_user_by_email(&profile.email).await? {
            Some(user) => user,
            None => {
                let full_name = profile
                    .full_name
                    .unwrap_or_else(|| profile.email.clone());

                let user = self
                    .repo
                    .create_user(CreateUserDto {
                        full_name,
                        email: profile.email.clone(),
                        password_hash: None,
                        role: Some(UserRole::Student),
                        is_verified: true,
                        verification_token: None,
                    })
                    .await?;

                info!(user_id = user.id, email = %user.email, "Account created via Google sign-in");
                user
            }
        };

        self.issue_session(user)
    }

    // ── Email verification ──────────────────────────────────────

    /// Redeem a verification token, marking the account verified.
    pub async fn verify_email(&self, token: &str) -> DomainResult<User> {
        let user = self
            .repo
            .get_user_by_verification_token(token)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "verification_token",
                value: token.to_string(),
            })?;

        self.repo.mark_verified(user.id).await?;

        let verified = self
            .repo
            .get_user_by_id(user.id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user.id.to_string(),
            })?;

        info!(user_id = verified.id, "Email verified");
        Ok(verified)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user_by_id(&self, id: i64) -> DomainResult<User> {
        self.repo
            .get_user_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn get_user_by_email(&self, email: &str) -> DomainResult<User> {
        self.repo
            .get_user_by_email(email)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "email",
                value: email.to_string(),
            })
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Update self-service profile fields.
    pub async fn update_profile(&self, id: i64, dto: UpdateProfileDto) -> DomainResult<User> {
        self.repo
            .update_profile(id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Update institutional identifiers (student id, batch id).
    pub async fn update_ids(&self, id: i64, dto: UpdateIdsDto) -> DomainResult<User> {
        self.repo
            .update_ids(id, dto)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryUserRepo;
    use crate::infrastructure::crypto::jwt::verify_token;

    struct StaticVerifier {
        profile: Option<GoogleProfile>,
    }

    #[async_trait]
    impl IdTokenVerifier for StaticVerifier {
        async fn verify(&self, _id_token: &str) -> DomainResult<GoogleProfile> {
            self.profile
                .clone()
                .ok_or_else(|| DomainError::Unauthorized("Invalid ID token".into()))
        }
    }

    fn service(
        profile: Option<GoogleProfile>,
    ) -> IdentityService<InMemoryUserRepo, StaticVerifier> {
        IdentityService::new(
            Arc::new(InMemoryUserRepo::new()),
            Arc::new(StaticVerifier { profile }),
            JwtConfig::default(),
        )
    }

    #[tokio::test]
    async fn register_then_login_issues_token_with_role_claims() {
        let svc = service(None);

        let session = svc
            .register("Jane Perera", "jane@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(session.token_type, "Bearer");
        assert!(!session.user.is_verified);

        let session = svc.login("jane@example.com", "password123").await.unwrap();
        let claims = verify_token(&session.token, &JwtConfig::default()).unwrap();
        assert_eq!(claims.user_id(), Some(session.user.id));
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, "STUDENT");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let svc = service(None);
        svc.register("Jane Perera", "jane@example.com", "password123")
            .await
            .unwrap();

        let err = svc
            .login("jane@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn duplicate_email_registration_conflicts() {
        let svc = service(None);
        svc.register("Jane Perera", "jane@example.com", "password123")
            .await
            .unwrap();

        let err = svc
            .register("Other Jane", "jane@example.com", "password456")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let svc = service(None);
        let err = svc
            .register("Jane Perera", "jane@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn first_google_login_creates_verified_passwordless_account() {
        let svc = service(Some(GoogleProfile {
            email: "g@example.com".into(),
            full_name: Some("G User".into()),
        }));

        let session = svc.google_login("some-id-token").await.unwrap();
        assert!(session.user.is_verified);
        assert!(session.user.password_hash.is_none());
        assert_eq!(session.user.full_name, "G User");

        // Password login is impossible for that account
        let err = svc.login("g@example.com", "anything").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        // Second sign-in reuses the account
        let again = svc.google_login("some-id-token").await.unwrap();
        assert_eq!(again.user.id, session.user.id);
    }

    #[tokio::test]
    async fn verify_email_flips_flag_and_consumes_token() {
        let svc = service(None);
        let session = svc
            .register("Jane Perera", "jane@example.com", "password123")
            .await
            .unwrap();

        let token = session.user.verification_token.clone().unwrap();
        let verified = svc.verify_email(&token).await.unwrap();
        assert!(verified.is_verified);
        assert!(verified.verification_token.is_none());

        let err = svc.verify_email(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn profile_update_round_trips_on_next_fetch() {
        let svc = service(None);
        let session = svc
            .register("Jane Perera", "jane@example.com", "password123")
            .await
            .unwrap();

        svc.update_profile(
            session.user.id,
            UpdateProfileDto {
                hometown: Some("Colombo".into()),
                contact_number: Some("+94 77 123 4567".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let fetched = svc.get_user_by_email("jane@example.com").await.unwrap();
        assert_eq!(fetched.hometown.as_deref(), Some("Colombo"));
        assert_eq!(fetched.contact_number.as_deref(), Some("+94 77 123 4567"));
        // Fields absent from the edit are left untouched
        assert_eq!(fetched.full_name, "Jane Perera");
        assert_eq!(fetched.nic, None);

        let err = svc
            .update_profile(9999, UpdateProfileDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
