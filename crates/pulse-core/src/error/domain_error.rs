//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ContentKind;

/// Failure talking to the remote content-management service.
///
/// Timeout is its own kind: callers may retry a timeout, and a timed-out
/// fetch must never be confused with "no content found".
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Content service timed out")]
    Timeout,

    #[error("Content service error: {0}")]
    Upstream(String),

    #[error("Content service returned a malformed payload: {0}")]
    Malformed(String),
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The relational store rejected a query. Never retried internally.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The content-management service failed or timed out
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Caller asked for detail on content they have not activated
    #[error("Content of kind {kind} has not been activated by this user")]
    NotActivated { kind: ContentKind },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Gateway(GatewayError::Timeout) => "GATEWAY_TIMEOUT",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::NotActivated { .. } => "NOT_ACTIVATED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is an authorization-style error (403-equivalent)
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotActivated { .. })
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a gateway timeout (the one retryable kind)
    #[must_use]
    pub fn is_gateway_timeout(&self) -> bool {
        matches!(self, Self::Gateway(GatewayError::Timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::Storage("connection reset".to_string());
        assert_eq!(err.code(), "STORAGE_ERROR");

        let err = DomainError::NotActivated { kind: ContentKind::Post };
        assert_eq!(err.code(), "NOT_ACTIVATED");
        assert!(err.is_authorization());
    }

    #[test]
    fn test_gateway_timeout_is_distinct() {
        let timeout = DomainError::from(GatewayError::Timeout);
        let upstream = DomainError::from(GatewayError::Upstream("502".to_string()));

        assert!(timeout.is_gateway_timeout());
        assert!(!upstream.is_gateway_timeout());
        assert_eq!(timeout.code(), "GATEWAY_TIMEOUT");
        assert_eq!(upstream.code(), "GATEWAY_ERROR");
    }

    #[test]
    fn test_not_activated_display_names_kind() {
        let err = DomainError::NotActivated { kind: ContentKind::Place };
        assert!(err.to_string().contains("place"));
    }
}
