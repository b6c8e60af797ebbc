//! Application error types
//!
//! Unified error handling for the entire application.

use pulse_core::{DomainError, GatewayError};
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Identity errors (headers injected by the upstream auth layer)
    #[error("Missing identity headers")]
    MissingIdentity,

    #[error("Invalid identity header: {0}")]
    InvalidIdentity(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) | Self::InvalidInput(_) | Self::InvalidIdentity(_) => 400,

            // 401 Unauthorized
            Self::MissingIdentity => 401,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // 502 for the external content service
            Self::ExternalService(_) => 502,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => match e {
                DomainError::NotActivated { .. } => 403,
                DomainError::Validation(_) => 400,
                DomainError::Gateway(GatewayError::Timeout) => 504,
                DomainError::Gateway(_) => 502,
                DomainError::Storage(_) | DomainError::Internal(_) => 500,
            },
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::InvalidIdentity(_) => "INVALID_IDENTITY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::ContentKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingIdentity.status_code(), 401);
        assert_eq!(AppError::NotFound("reaction".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::ExternalService("test".to_string()).status_code(), 502);
    }

    #[test]
    fn test_domain_error_mapping() {
        let err = AppError::from(DomainError::NotActivated { kind: ContentKind::Post });
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "NOT_ACTIVATED");

        let err = AppError::from(DomainError::from(GatewayError::Timeout));
        assert_eq!(err.status_code(), 504);
        assert_eq!(err.error_code(), "GATEWAY_TIMEOUT");

        let err = AppError::from(DomainError::from(GatewayError::Upstream("boom".into())));
        assert_eq!(err.status_code(), 502);
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::MissingIdentity.is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
        assert!(AppError::Database("test".to_string()).is_server_error());
    }

    #[test]
    fn test_error_response() {
        let err = AppError::NotFound("reaction".to_string());
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Resource not found: reaction");
        assert!(response.details.is_none());
    }
}
