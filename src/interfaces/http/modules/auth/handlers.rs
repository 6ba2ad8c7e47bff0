//! Authentication API handlers
//!
//! Login, registration, Google sign-in and email verification.
//! Delegates to `IdentityService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    AuthResponse, GoogleLoginRequest, LoginRequest, RegisterRequest, VerifyParams,
};
use super::super::users::dto::UserDto;
use super::super::users::handlers::AppIdentityService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity_service: Arc<AppIdentityService>,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<AuthResponse>>)> {
    match state
        .identity_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => Ok(Json(ApiResponse::success(AuthResponse::from(session)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthResponse>),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<AuthResponse>>),
    (StatusCode, Json<ApiResponse<AuthResponse>>),
> {
    match state
        .identity_service
        .register(&request.full_name, &request.email, &request.password)
        .await
    {
        Ok(session) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(AuthResponse::from(session))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = "Authentication",
    request_body = GoogleLoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid ID token")
    )
)]
pub async fn google_login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<GoogleLoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<AuthResponse>>)> {
    match state.identity_service.google_login(&request.id_token).await {
        Ok(session) => Ok(Json(ApiResponse::success(AuthResponse::from(session)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = "Authentication",
    params(VerifyParams),
    responses(
        (status = 200, description = "Email verified", body = ApiResponse<UserDto>),
        (status = 404, description = "Unknown or already used token")
    )
)]
pub async fn verify_email(
    State(state): State<AuthHandlerState>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.identity_service.verify_email(&params.token).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.identity_service.get_user_by_id(auth.user_id).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}
