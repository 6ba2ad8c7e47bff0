//! Course catalog API handlers
//!
//! Listing is public; create, replace and delete are admin-only.
//! Delegates to `CatalogService` from the application/catalog layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CourseDto, CourseRequest};
use crate::application::catalog::CatalogService;
use crate::infrastructure::database::repositories::CourseRepository;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

/// Concrete catalog service used by the HTTP layer
pub type AppCatalogService = CatalogService<CourseRepository>;

/// Catalog handler state
#[derive(Clone)]
pub struct CatalogHandlerState {
    pub catalog_service: Arc<AppCatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "Course list", body = ApiResponse<Vec<CourseDto>>)
    )
)]
pub async fn list_courses(
    State(state): State<CatalogHandlerState>,
) -> Result<Json<ApiResponse<Vec<CourseDto>>>, (StatusCode, Json<ApiResponse<Vec<CourseDto>>>)> {
    match state.catalog_service.list_courses().await {
        Ok(courses) => Ok(Json(ApiResponse::success(
            courses.into_iter().map(CourseDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "Courses",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = ApiResponse<CourseDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_course(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CourseDto>>, (StatusCode, Json<ApiResponse<CourseDto>>)> {
    match state.catalog_service.get_course(id).await {
        Ok(course) => Ok(Json(ApiResponse::success(CourseDto::from(course)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid mode or level"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_course(
    State(state): State<CatalogHandlerState>,
    ValidatedJson(request): ValidatedJson<CourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseDto>>), (StatusCode, Json<ApiResponse<CourseDto>>)>
{
    let input = request.into_input().map_err(domain_error)?;

    match state.catalog_service.create_course(input).await {
        Ok(course) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(CourseDto::from(course))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Course ID")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course replaced", body = ApiResponse<CourseDto>),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_course(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CourseRequest>,
) -> Result<Json<ApiResponse<CourseDto>>, (StatusCode, Json<ApiResponse<CourseDto>>)> {
    let input = request.into_input().map_err(domain_error)?;

    match state.catalog_service.update_course(id, input).await {
        Ok(course) => Ok(Json(ApiResponse::success(CourseDto::from(course)))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_course(
    State(state): State<CatalogHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.catalog_service.delete_course(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error(e)),
    }
}
