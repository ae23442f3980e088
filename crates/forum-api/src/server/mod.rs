//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use forum_common::{AppConfig, AppError, JwtService};
use forum_db::{create_pool, run_migrations, DatabaseConfig};
use forum_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the common layers but bypass the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Connect to PostgreSQL, optionally migrate, and assemble the state
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to connect to database: {e}")))?;
    info!("PostgreSQL connection established");

    if let Some(dir) = &config.migrations_dir {
        run_migrations(&pool, &PathBuf::from(dir))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to run migrations: {e}")))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContext::postgres(pool.clone(), jwt_service);

    Ok(AppState::new(service_context, config, pool))
}

/// Serve `app` on the configured address until the process stops
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{address}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &address).await
}
