//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, the database pool, and configuration.

use std::sync::Arc;

use pulse_common::AppConfig;
use pulse_db::PgPool;
use pulse_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: ServiceContext,
    /// Database pool, held separately for readiness probes
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, pool: PgPool, config: AppConfig) -> Self {
        Self {
            service_context,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
