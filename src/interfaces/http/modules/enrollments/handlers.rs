//! Enrollment API handlers
//!
//! Booking, unenrolling and certificate attachment for authenticated users.
//! Delegates to `EnrollmentService` from the application/enrollment layer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{BookCourseRequest, CertificateParams, EnrollmentDto};
use crate::application::enrollment::EnrollmentService;
use crate::infrastructure::database::repositories::{
    CourseRepository, EnrollmentRepository, UserRepository,
};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

/// Concrete enrollment service used by the HTTP layer
pub type AppEnrollmentService =
    EnrollmentService<UserRepository, CourseRepository, EnrollmentRepository>;

/// Enrollment handler state
#[derive(Clone)]
pub struct EnrollmentHandlerState {
    pub enrollment_service: Arc<AppEnrollmentService>,
}

#[utoipa::path(
    get,
    path = "/api/user-courses/{user_id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's enrollments", body = ApiResponse<Vec<EnrollmentDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_user_courses(
    State(state): State<EnrollmentHandlerState>,
    Path(user_id): Path<i64>,
) -> Result<
    Json<ApiResponse<Vec<EnrollmentDto>>>,
    (StatusCode, Json<ApiResponse<Vec<EnrollmentDto>>>),
> {
    match state.enrollment_service.list_for_user(user_id).await {
        Ok(enrollments) => Ok(Json(ApiResponse::success(
            enrollments.into_iter().map(EnrollmentDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/user-selected-courses/user/{user_id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's enrollments", body = ApiResponse<Vec<EnrollmentDto>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_user_selected_courses(
    State(state): State<EnrollmentHandlerState>,
    Path(user_id): Path<i64>,
) -> Result<
    Json<ApiResponse<Vec<EnrollmentDto>>>,
    (StatusCode, Json<ApiResponse<Vec<EnrollmentDto>>>),
> {
    match state.enrollment_service.list_for_user(user_id).await {
        Ok(enrollments) => Ok(Json(ApiResponse::success(
            enrollments.into_iter().map(EnrollmentDto::from).collect(),
        ))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/user-selected-courses/book",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    request_body = BookCourseRequest,
    responses(
        (status = 201, description = "Course booked", body = ApiResponse<EnrollmentDto>),
        (status = 404, description = "Unknown user or course"),
        (status = 409, description = "Already enrolled")
    )
)]
pub async fn book_course(
    State(state): State<EnrollmentHandlerState>,
    ValidatedJson(request): ValidatedJson<BookCourseRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<EnrollmentDto>>),
    (StatusCode, Json<ApiResponse<EnrollmentDto>>),
> {
    let dto = request.into_dto().map_err(domain_error)?;

    match state.enrollment_service.book_course(dto).await {
        Ok(enrollment) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(EnrollmentDto::from(enrollment))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/user-selected-courses/{user_id}/{course_id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("course_id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollment removed"),
        (status = 404, description = "No such booking")
    )
)]
pub async fn unenroll(
    State(state): State<EnrollmentHandlerState>,
    Path((user_id, course_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.enrollment_service.unenroll(user_id, course_id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/user-selected-courses/{enrollment_id}/certificate-url",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(
        ("enrollment_id" = i64, Path, description = "Enrollment ID"),
        CertificateParams
    ),
    responses(
        (status = 200, description = "Certificate attached", body = ApiResponse<EnrollmentDto>),
        (status = 400, description = "Empty certificateUrl"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_certificate_url(
    State(state): State<EnrollmentHandlerState>,
    Path(enrollment_id): Path<i64>,
    Query(params): Query<CertificateParams>,
) -> Result<Json<ApiResponse<EnrollmentDto>>, (StatusCode, Json<ApiResponse<EnrollmentDto>>)> {
    match state
        .enrollment_service
        .set_certificate_url(enrollment_id, &params.certificate_url)
        .await
    {
        Ok(enrollment) => Ok(Json(ApiResponse::success(EnrollmentDto::from(enrollment)))),
        Err(e) => Err(domain_error(e)),
    }
}
