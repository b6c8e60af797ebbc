//! # pulse-common
//!
//! Shared utilities including configuration, error handling, localized
//! messages, and telemetry.

pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, ContentServiceConfig, DatabaseConfig, Environment,
    ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use i18n::translate;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
