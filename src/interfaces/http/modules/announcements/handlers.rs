//! Announcement API handlers
//!
//! Admin broadcast management plus the per-student feed.
//! Delegates to `AnnouncementService` from the application/announcements layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{AnnouncementDto, CreateAnnouncementRequest, RecipientDto};
use crate::application::announcements::AnnouncementService;
use crate::infrastructure::database::repositories::{AnnouncementRepository, UserRepository};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Concrete announcement service used by the HTTP layer
pub type AppAnnouncementService = AnnouncementService<AnnouncementRepository, UserRepository>;

/// Announcement handler state
#[derive(Clone)]
pub struct AnnouncementHandlerState {
    pub announcement_service: Arc<AppAnnouncementService>,
}

#[utoipa::path(
    post,
    path = "/api/admin/announcements",
    tag = "Announcements",
    security(("bearer_auth" = [])),
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement published", body = ApiResponse<AnnouncementDto>),
        (status = 400, description = "Invalid target or zero recipients"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_announcement(
    State(state): State<AnnouncementHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateAnnouncementRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<AnnouncementDto>>),
    (StatusCode, Json<ApiResponse<AnnouncementDto>>),
> {
    let dto = request.into_dto(Some(auth.user_id));

    match state.announcement_service.create(dto).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(AnnouncementDto::from(created))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/announcements",
    tag = "Announcements",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All announcements", body = ApiResponse<Vec<AnnouncementDto>>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_announcements(
    State(state): State<AnnouncementHandlerState>,
) -> Result<
    Json<ApiResponse<Vec<AnnouncementDto>>>,
    (StatusCode, Json<ApiResponse<Vec<AnnouncementDto>>>),
> {
    match state.announcement_service.list_all().await {
        Ok(rows) => Ok(Json(ApiResponse::success(
            rows.into_iter().map(AnnouncementDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/announcements/{id}/recipients",
    tag = "Announcements",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Materialized recipients", body = ApiResponse<Vec<RecipientDto>>),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn list_recipients(
    State(state): State<AnnouncementHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<RecipientDto>>>, (StatusCode, Json<ApiResponse<Vec<RecipientDto>>>)>
{
    match state.announcement_service.recipients(id).await {
        Ok(recipients) => Ok(Json(ApiResponse::success(
            recipients.into_iter().map(RecipientDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/announcements/{id}",
    tag = "Announcements",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_announcement(
    State(state): State<AnnouncementHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.announcement_service.delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/announcements/user/{user_id}",
    tag = "Announcements",
    security(("bearer_auth" = [])),
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Announcements addressed to the user", body = ApiResponse<Vec<AnnouncementDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_for_user(
    State(state): State<AnnouncementHandlerState>,
    Path(user_id): Path<i64>,
) -> Result<
    Json<ApiResponse<Vec<AnnouncementDto>>>,
    (StatusCode, Json<ApiResponse<Vec<AnnouncementDto>>>),
> {
    match state.announcement_service.list_for_user(user_id).await {
        Ok(rows) => Ok(Json(ApiResponse::success(
            rows.into_iter().map(AnnouncementDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}
