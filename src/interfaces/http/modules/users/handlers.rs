//! User profile API handlers
//!
//! Authenticated self-service endpoints.
//! Delegates to `IdentityService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{UpdateIdsRequest, UpdateProfileRequest, UserDto};
use crate::application::identity::IdentityService;
use crate::domain::{UpdateIdsDto, UpdateProfileDto};
use crate::infrastructure::crypto::google::GoogleTokenVerifier;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

/// Concrete identity service used by the HTTP layer
pub type AppIdentityService = IdentityService<UserRepository, GoogleTokenVerifier>;

/// User handler state: concrete over `UserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub identity_service: Arc<AppIdentityService>,
}

#[utoipa::path(
    get,
    path = "/api/users/{email}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<UserHandlerState>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.identity_service.get_user_by_email(&email).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_profile(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    let dto = UpdateProfileDto {
        full_name: request.full_name,
        hometown: request.hometown,
        contact_number: request.contact_number,
        status: request.status,
        nic: request.nic,
        sex: request.sex,
        date_of_birth: request.date_of_birth,
    };

    match state.identity_service.update_profile(id, dto).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/ids",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateIdsRequest,
    responses(
        (status = 200, description = "Identifiers updated", body = ApiResponse<UserDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_ids(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateIdsRequest>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    let dto = UpdateIdsDto {
        student_id: request.student_id,
        batch_id: request.batch_id,
    };

    match state.identity_service.update_ids(id, dto).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}
