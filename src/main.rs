//! EduHub backend server
//!
//! REST API for the EduHub learning platform. Reads configuration from
//! a TOML file (~/.config/eduhub/config.toml) and serves the API with
//! Swagger UI at /docs.

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use eduhub::config::AppConfig;
use eduhub::infrastructure::crypto::jwt::JwtConfig;
use eduhub::infrastructure::database::migrator::Migrator;
use eduhub::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("EDUHUB_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            warn!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting EduHub service...");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_days: app_cfg.security.jwt_expiration_days,
        issuer: "eduhub".to_string(),
    };
    info!(
        "JWT configured with {}-day token expiration",
        jwt_config.expiration_days
    );

    if app_cfg.google.client_id.is_empty() {
        warn!("Google client id not configured; Google sign-in will reject all tokens");
    }

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin user if not exists
    create_default_admin(&db, &app_cfg).await;

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(
        db.clone(),
        jwt_config,
        app_cfg.google.client_id.clone(),
    );

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Performing final cleanup...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("EduHub service shutdown complete");
    Ok(())
}

fn init_tracing(cfg: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));
    if cfg.logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Create the seed admin account when the users table is empty
async fn create_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use eduhub::infrastructure::crypto::password::hash_password;
    use eduhub::infrastructure::database::entities::user::{self, AccountStatus, UserRole};

    let users_count = user::Entity::find().count(db).await.unwrap_or(0);
    if users_count > 0 {
        return;
    }

    info!("Creating default admin user...");

    let password_hash = match hash_password(&app_cfg.admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let now = chrono::Utc::now();
    let admin = user::ActiveModel {
        full_name: Set(app_cfg.admin.full_name.clone()),
        email: Set(app_cfg.admin.email.clone()),
        password_hash: Set(Some(password_hash)),
        role: Set(UserRole::Admin),
        account_status: Set(AccountStatus::Active),
        is_verified: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match admin.insert(db).await {
        Ok(_) => {
            info!("Default admin created: {}", app_cfg.admin.email);
            warn!("Please change the admin password immediately!");
        }
        Err(e) => {
            error!("Failed to create admin user: {}", e);
        }
    }
}
