//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use pulse_common::AppError;
use pulse_core::{DomainError, GatewayError};
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or infrastructure failure surfaced by a port
    #[error(transparent)]
    Domain(DomainError),

    /// Application error (identity, config, etc.)
    #[error(transparent)]
    App(AppError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => match e {
                DomainError::NotActivated { .. } => 403,
                DomainError::Validation(_) => 400,
                DomainError::Gateway(GatewayError::Timeout) => 504,
                DomainError::Gateway(_) => 502,
                DomainError::Storage(_) | DomainError::Internal(_) => 500,
            },
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        Self::Domain(DomainError::Gateway(err))
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
