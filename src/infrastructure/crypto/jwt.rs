//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token validity in days (the legacy deployment issued 7-day tokens)
    pub expiration_days: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "super-secret-key-change-in-production".to_string()),
            expiration_days: std::env::var("JWT_EXPIRATION_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            issuer: "eduhub".to_string(),
        }
    }
}

/// JWT claims carried by every session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user id)
    pub sub: String,
    /// Account email
    pub email: String,
    /// User role ("STUDENT" | "ADMIN")
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    pub fn new(user_id: i64, email: &str, role: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::days(config.expiration_days);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }

    /// Numeric user id from the subject claim
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Create a session token for a user
pub fn create_token(
    user_id: i64,
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(user_id, email, role, config);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a session token
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_token() {
        let config = JwtConfig::default();
        let token = create_token(42, "admin@example.com", "ADMIN", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "ADMIN");
        assert!(!claims.is_expired());
        assert!(claims.is_admin());
    }

    #[test]
    fn student_token_is_not_admin() {
        let config = JwtConfig::default();
        let token = create_token(7, "user@example.com", "STUDENT", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn invalid_token_is_rejected() {
        let config = JwtConfig::default();
        assert!(verify_token("invalid-token", &config).is_err());
    }

    #[test]
    fn token_from_wrong_secret_is_rejected() {
        let config = JwtConfig::default();
        let other = JwtConfig {
            secret: "different-secret".into(),
            ..JwtConfig::default()
        };
        let token = create_token(1, "user@example.com", "STUDENT", &other).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }
}
