//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pulse_common::{translate, AppError};
use pulse_core::DomainError;
use pulse_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Locale-resolved 403 for acting on content without an activated reaction
    #[error("{message}")]
    NotActivated { message: String },

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotActivated { .. } => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::NotActivated { .. } => "NOT_ACTIVATED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Wrap a service error, resolving the NotActivated message in the
    /// caller's locale
    #[must_use]
    pub fn from_service(err: ServiceError, locale: &str) -> Self {
        match &err {
            ServiceError::Domain(DomainError::NotActivated { .. }) => Self::NotActivated {
                message: translate(locale, "reactions.notActivated"),
            },
            _ => Self::Service(err),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();
        let message = self.to_string();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        // Build details for validation errors
        let details = if let Self::Validation(errors) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::ContentKind;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::App(AppError::MissingIdentity).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidPath("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_activated_is_localized() {
        let err = ApiError::from_service(
            ServiceError::from(DomainError::NotActivated {
                kind: ContentKind::Post,
            }),
            "es-mx",
        );
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.error_code(), "NOT_ACTIVATED");
        assert_eq!(err.to_string(), translate("es-mx", "reactions.notActivated"));
    }

    #[test]
    fn test_other_service_errors_pass_through() {
        let err = ApiError::from_service(
            ServiceError::from(DomainError::Storage("down".to_string())),
            "en-us",
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
