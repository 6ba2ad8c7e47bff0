//! Admin user-management API handlers
//!
//! Admin-only oversight endpoints.
//! Delegates to `AdminUserService` from the application/admin layer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{AccountStatusParams, AdminUserDto};
use super::super::users::dto::UserDto;
use crate::application::admin::AdminUserService;
use crate::infrastructure::database::repositories::{EnrollmentRepository, UserRepository};
use crate::interfaces::http::common::{domain_error, ApiResponse};

/// Concrete admin service used by the HTTP layer
pub type AppAdminUserService = AdminUserService<UserRepository, EnrollmentRepository>;

/// Admin user handler state
#[derive(Clone)]
pub struct AdminUserHandlerState {
    pub admin_service: Arc<AppAdminUserService>,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users with enrollments", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(
    State(state): State<AdminUserHandlerState>,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>, (StatusCode, Json<ApiResponse<Vec<AdminUserDto>>>)>
{
    match state.admin_service.list_users().await {
        Ok(users) => Ok(Json(ApiResponse::success(
            users.into_iter().map(AdminUserDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/status",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "User ID"),
        AccountStatusParams
    ),
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Unknown status"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_account_status(
    State(state): State<AdminUserHandlerState>,
    Path(id): Path<i64>,
    Query(params): Query<AccountStatusParams>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state
        .admin_service
        .update_account_status(id, &params.account_status)
        .await
    {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error(e)),
    }
}
