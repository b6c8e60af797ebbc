//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` overrides the configured level when set.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Create a development configuration with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            file_line: true,
        }
    }

    /// Create a production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            file_line: false,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Initialize the tracing subscriber with custom configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing_with_config(config: TracingConfig) {
    if config.json {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.file_line)
                    .with_line_number(config.file_line),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(
                fmt::layer()
                    .with_file(config.file_line)
                    .with_line_number(config.file_line),
            )
            .init();
    }
}

/// Try to initialize tracing, returning an error instead of panicking when a
/// subscriber is already installed (tests, embedded use).
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Try to initialize tracing with custom configuration
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    if config.json {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(
                fmt::layer()
                    .json()
                    .with_file(config.file_line)
                    .with_line_number(config.file_line),
            )
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(
                fmt::layer()
                    .with_file(config.file_line)
                    .with_line_number(config.file_line),
            )
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
        assert!(config.file_line);
    }

    #[test]
    fn test_production_config() {
        let config = TracingConfig::production();
        assert_eq!(config.level, Level::INFO);
        assert!(config.json);
        assert!(!config.file_line);
    }

    // The global subscriber can only be set once per process, so init paths
    // are exercised by integration tests rather than here.
}
