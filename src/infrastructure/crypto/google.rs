//! Google ID-token verification
//!
//! The client exchanges a Google credential for a local session via
//! `POST /api/auth/google`. The ID token is checked against Google's
//! tokeninfo endpoint and the audience must match the configured client id.

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::identity::{GoogleProfile, IdTokenVerifier};
use crate::shared::{DomainError, DomainResult};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Verifier backed by Google's HTTPS tokeninfo endpoint
#[derive(Clone)]
pub struct GoogleTokenVerifier {
    http: reqwest::Client,
    client_id: String,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: client_id.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email_verified: Option<String>,
}

#[async_trait]
impl IdTokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, id_token: &str) -> DomainResult<GoogleProfile> {
        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                DomainError::Unauthorized(format!("Google token verification failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(DomainError::Unauthorized("Invalid ID token".into()));
        }

        let info: TokenInfo = response.json().await.map_err(|e| {
            DomainError::Unauthorized(format!("Google token verification failed: {}", e))
        })?;

        if info.aud != self.client_id {
            return Err(DomainError::Unauthorized(
                "ID token issued for a different client".into(),
            ));
        }

        if info.email_verified.as_deref() == Some("false") {
            return Err(DomainError::Unauthorized(
                "Google account email is not verified".into(),
            ));
        }

        Ok(GoogleProfile {
            email: info.email,
            full_name: info.name,
        })
    }
}
