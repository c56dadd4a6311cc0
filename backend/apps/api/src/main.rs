//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, LogMailer, PgUserRepository, SmtpConfig, SmtpMailer};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = AuthConfig {
        password_pepper: env::var("PASSWORD_PEPPER")
            .ok()
            .map(|p| p.into_bytes()),
        verification_template: env::var("VERIFICATION_TEMPLATE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("templates/verification_email.html")),
        ..AuthConfig::default()
    };

    let repo = PgUserRepository::new(pool.clone());

    // SMTP if configured, otherwise log-only delivery for development
    let auth_routes = match smtp_config_from_env() {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, "Using SMTP mail transport");
            auth::router::auth_router(repo, SmtpMailer::new(&smtp)?, auth_config)
        }
        None => {
            tracing::warn!("SMTP not configured, verification emails go to the log");
            auth::router::auth_router_generic(repo, LogMailer, auth_config)
        }
    };

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .nest("/api/auth", auth_routes)
        .layer(TraceLayer::new_for_http());

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /
async fn health() -> &'static str {
    "API is running"
}

/// Read SMTP settings from the environment; any missing variable
/// disables SMTP delivery
fn smtp_config_from_env() -> Option<SmtpConfig> {
    Some(SmtpConfig {
        host: env::var("SMTP_HOST").ok()?,
        port: env::var("SMTP_PORT").ok()?.parse().ok()?,
        username: env::var("SMTP_USERNAME").ok()?,
        password: env::var("SMTP_PASSWORD").ok()?,
        from_address: env::var("MAIL_FROM").ok()?,
    })
}
