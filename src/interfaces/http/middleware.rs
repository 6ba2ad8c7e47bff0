//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    InsufficientPermissions,
}

/// Authentication state carrying the JWT configuration
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user extracted from a verified session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            role: claims.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware: inserts `AuthenticatedUser` on success
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response(AuthError::ExpiredToken);
            }
            let Some(user) = AuthenticatedUser::from_claims(claims) else {
                return auth_error_response(AuthError::InvalidToken);
            };
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(_) => auth_error_response(AuthError::InvalidToken),
    }
}

/// Admin-only guard. Must be layered AFTER `auth_middleware` so the
/// `AuthenticatedUser` extension is already present.
pub async fn require_admin(request: Request<Body>, next: Next) -> Response {
    match request.extensions().get::<AuthenticatedUser>() {
        Some(user) if user.is_admin() => next.run(request).await,
        Some(_) => auth_error_response(AuthError::InsufficientPermissions),
        None => auth_error_response(AuthError::MissingToken),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
        AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "Admin role required"),
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{middleware, Router};

    use crate::infrastructure::crypto::jwt::create_token;

    async fn handler() -> &'static str {
        "ok"
    }

    fn protected_app(jwt_config: JwtConfig) -> Router {
        let state = AuthState { jwt_config };
        Router::new()
            .route("/protected", get(handler))
            .nest(
                "/admin",
                Router::new()
                    .route("/users", get(handler))
                    .layer(middleware::from_fn(require_admin)),
            )
            .layer(middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn send(app: Router, uri: &str, token: Option<&str>) -> StatusCode {
        use tower::Service;
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let req = builder.body(Body::empty()).unwrap();
        let mut svc = app.into_service();
        svc.call(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn missing_token_is_401() {
        let app = protected_app(JwtConfig::default());
        assert_eq!(
            send(app, "/protected", None).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn garbage_token_is_401() {
        let app = protected_app(JwtConfig::default());
        assert_eq!(
            send(app, "/protected", Some("garbage")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn valid_student_token_passes_protected_route() {
        let config = JwtConfig::default();
        let token = create_token(1, "jane@example.com", "STUDENT", &config).unwrap();
        let app = protected_app(config);
        assert_eq!(send(app, "/protected", Some(&token)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn student_token_on_admin_route_is_403() {
        let config = JwtConfig::default();
        let token = create_token(1, "jane@example.com", "STUDENT", &config).unwrap();
        let app = protected_app(config);
        assert_eq!(
            send(app, "/admin/users", Some(&token)).await,
            StatusCode::FORBIDDEN
        );
    }

    #[tokio::test]
    async fn admin_token_on_admin_route_passes() {
        let config = JwtConfig::default();
        let token = create_token(1, "root@example.com", "ADMIN", &config).unwrap();
        let app = protected_app(config);
        assert_eq!(
            send(app, "/admin/users", Some(&token)).await,
            StatusCode::OK
        );
    }
}
