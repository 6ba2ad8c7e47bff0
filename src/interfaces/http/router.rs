//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    handler::Handler,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    AdminUserService, AnnouncementService, CatalogService, EnrollmentService, IdentityService,
};
use crate::infrastructure::crypto::google::GoogleTokenVerifier;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{
    AnnouncementRepository, CourseRepository, EnrollmentRepository, UserRepository,
};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, require_admin, AuthState};

use super::modules::{admin_users, announcements, auth, courses, enrollments, health, users};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::register,
        auth::google_login,
        auth::verify_email,
        auth::get_current_user,
        // Users
        users::get_user_by_email,
        users::update_profile,
        users::update_ids,
        // Courses
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        courses::update_course,
        courses::delete_course,
        // Enrollments
        enrollments::list_user_courses,
        enrollments::list_user_selected_courses,
        enrollments::book_course,
        enrollments::unenroll,
        enrollments::set_certificate_url,
        // Admin
        admin_users::list_users,
        admin_users::update_account_status,
        // Announcements
        announcements::create_announcement,
        announcements::list_announcements,
        announcements::list_recipients,
        announcements::delete_announcement,
        announcements::list_for_user,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Auth
            auth::LoginRequest,
            auth::RegisterRequest,
            auth::GoogleLoginRequest,
            auth::AuthResponse,
            // Users
            users::UserDto,
            users::UpdateProfileRequest,
            users::UpdateIdsRequest,
            // Courses
            courses::CourseDto,
            courses::CourseRequest,
            // Enrollments
            enrollments::EnrollmentDto,
            enrollments::BookCourseRequest,
            // Admin
            admin_users::AdminUserDto,
            // Announcements
            announcements::CreateAnnouncementRequest,
            announcements::AnnouncementDto,
            announcements::RecipientDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Login (JWT), registration, Google sign-in, email verification"),
        (name = "Users", description = "Profile lookup and self-service edits"),
        (name = "Courses", description = "Course catalog: public listing, admin CRUD"),
        (name = "Enrollments", description = "Course bookings, progress and certificates"),
        (name = "Admin", description = "Admin console: user oversight"),
        (name = "Announcements", description = "Admin broadcasts and the per-student feed"),
    ),
    info(
        title = "EduHub API",
        version = "1.0.0",
        description = "REST API for the EduHub learning platform: accounts, courses, enrollments and announcements"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    google_client_id: String,
) -> Router {
    // ── Repositories and services ───────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.clone()));
    let course_repo = Arc::new(CourseRepository::new(db.clone()));
    let enrollment_repo = Arc::new(EnrollmentRepository::new(db.clone()));
    let announcement_repo = Arc::new(AnnouncementRepository::new(db.clone()));

    let verifier = Arc::new(GoogleTokenVerifier::new(google_client_id));

    let identity_service = Arc::new(IdentityService::new(
        user_repo.clone(),
        verifier,
        jwt_config.clone(),
    ));
    let catalog_service = Arc::new(CatalogService::new(course_repo.clone()));
    let enrollment_service = Arc::new(EnrollmentService::new(
        user_repo.clone(),
        course_repo,
        enrollment_repo.clone(),
    ));
    let admin_service = Arc::new(AdminUserService::new(user_repo.clone(), enrollment_repo));
    let announcement_service = Arc::new(AnnouncementService::new(announcement_repo, user_repo));

    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    // ── Handler states ──────────────────────────────────────────
    let auth_state = auth::AuthHandlerState {
        identity_service: identity_service.clone(),
    };
    let user_state = users::UserHandlerState { identity_service };
    let catalog_state = courses::CatalogHandlerState { catalog_service };
    let enrollment_state = enrollments::EnrollmentHandlerState { enrollment_service };
    let admin_state = admin_users::AdminUserHandlerState { admin_service };
    let announcement_state = announcements::AnnouncementHandlerState {
        announcement_service,
    };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/google", post(auth::google_login))
        .route("/verify", get(auth::verify_email))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // User profile routes (protected). GET looks up by email, PUT by numeric
    // id; the shared segment name keeps the route table conflict-free.
    let user_routes = Router::new()
        .route(
            "/{id}",
            get(users::get_user_by_email).put(users::update_profile),
        )
        .route("/{id}/ids", put(users::update_ids))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(user_state);

    // Course routes: listing is public, mutations are admin-only.
    // The admin guard is attached per handler so GET stays open.
    let admin_guard = tower::ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .layer(middleware::from_fn(require_admin));

    let course_routes = Router::new()
        .route(
            "/",
            get(courses::list_courses)
                .post(courses::create_course.layer(admin_guard.clone())),
        )
        .route(
            "/{id}",
            get(courses::get_course)
                .put(courses::update_course.layer(admin_guard.clone()))
                .delete(courses::delete_course.layer(admin_guard)),
        )
        .with_state(catalog_state);

    // Enrollment routes (protected)
    let user_course_routes = Router::new()
        .route("/{user_id}", get(enrollments::list_user_courses))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(enrollment_state.clone());

    let enrollment_routes = Router::new()
        .route("/book", post(enrollments::book_course))
        .route("/user/{user_id}", get(enrollments::list_user_selected_courses))
        .route("/{id}/{course_id}", delete(enrollments::unenroll))
        .route(
            "/{id}/certificate-url",
            post(enrollments::set_certificate_url),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(enrollment_state);

    // Admin routes (admin-only)
    let admin_user_routes = Router::new()
        .route("/", get(admin_users::list_users))
        .route("/{id}/status", put(admin_users::update_account_status))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(admin_state);

    let admin_announcement_routes = Router::new()
        .route(
            "/",
            get(announcements::list_announcements).post(announcements::create_announcement),
        )
        .route("/{id}", delete(announcements::delete_announcement))
        .route("/{id}/recipients", get(announcements::list_recipients))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(announcement_state.clone());

    // Student announcement feed (protected)
    let announcement_feed_routes = Router::new()
        .route("/user/{user_id}", get(announcements::list_for_user))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(announcement_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Auth
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", auth_protected_routes)
        // Users
        .nest("/api/users", user_routes)
        // Courses
        .nest("/api/courses", course_routes)
        // Enrollments
        .nest("/api/user-courses", user_course_routes)
        .nest("/api/user-selected-courses", enrollment_routes)
        // Admin
        .nest("/api/admin/users", admin_user_routes)
        .nest("/api/admin/announcements", admin_announcement_routes)
        // Announcement feed
        .nest("/api/announcements", announcement_feed_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
