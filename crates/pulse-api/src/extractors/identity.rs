//! Identity extractor
//!
//! Builds the per-request identity context from the headers injected by the
//! upstream auth layer. Nothing here re-validates the caller; a missing or
//! malformed user id means the request never passed through that layer.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use pulse_common::AppError;
use pulse_core::RequestContext;
use uuid::Uuid;

use crate::response::ApiError;

/// Header carrying the authenticated user's id
pub const HEADER_USER_ID: &str = "x-userid";
/// Header carrying the caller's locale code
pub const HEADER_LOCALE: &str = "x-localecode";
/// Header carrying the original requesting host
pub const HEADER_ORIGIN_HOST: &str = "x-origin-host";

/// Identity context extracted from request headers
#[derive(Debug, Clone)]
pub struct Identity(pub RequestContext);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;

        let raw_user_id = headers
            .get(HEADER_USER_ID)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::App(AppError::MissingIdentity))?;
        let user_id = Uuid::parse_str(raw_user_id).map_err(|_| {
            tracing::warn!(header = HEADER_USER_ID, "Malformed user id header");
            ApiError::App(AppError::InvalidIdentity(format!(
                "{HEADER_USER_ID} is not a valid UUID"
            )))
        })?;

        let mut ctx = RequestContext::new(user_id);
        if let Some(locale) = headers.get(HEADER_LOCALE).and_then(|v| v.to_str().ok()) {
            ctx = ctx.with_locale(locale);
        }
        ctx.authorization = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        ctx.origin_host = headers
            .get(HEADER_ORIGIN_HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(Identity(ctx))
    }
}
