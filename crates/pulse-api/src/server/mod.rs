//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pulse_common::{AppConfig, AppError};
use pulse_db::{create_pool, DatabaseConfig, PgReactionRepository};
use pulse_gateway::HttpContentGateway;
use pulse_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create the content service client
    let gateway = HttpContentGateway::from_config(&config.content_service)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    info!(base_url = %config.content_service.base_url, "Content service client ready");

    // Build service context
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let service_context = ServiceContext::new(reaction_repo, Arc::new(gateway));

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
