//! Feed handlers
//!
//! Aggregated feed endpoints joining reaction rows with remote content.

use axum::{
    extract::{Path, State},
    Json,
};

use pulse_service::dto::{FeedByIdsRequest, FeedPage, FeedSearchRequest};
use pulse_service::FeedService;

use crate::extractors::{parse_collection, Identity, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Paginated feed of activated content
///
/// POST /{kind}-reactions/active/search
pub async fn search_active(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    ValidatedJson(body): ValidatedJson<FeedSearchRequest>,
) -> ApiResult<Json<FeedPage>> {
    let kind = parse_collection(&collection)?;

    let service = FeedService::new(state.service_context());
    let page = service
        .search_active(kind, &ctx, &body)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(page))
}

/// Targeted refresh of an explicit id set
///
/// POST /{kind}-reactions/active/search-by-ids
pub async fn search_active_by_ids(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    ValidatedJson(body): ValidatedJson<FeedByIdsRequest>,
) -> ApiResult<Json<FeedPage>> {
    let kind = parse_collection(&collection)?;

    let service = FeedService::new(state.service_context());
    let page = service
        .search_active_by_ids(kind, &ctx, &body)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(page))
}

/// Paginated feed restricted to bookmarked reactions
///
/// POST /{kind}-reactions/bookmarked/search
pub async fn search_bookmarked(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    ValidatedJson(body): ValidatedJson<FeedSearchRequest>,
) -> ApiResult<Json<FeedPage>> {
    let kind = parse_collection(&collection)?;

    let service = FeedService::new(state.service_context());
    let page = service
        .search_bookmarked(kind, &ctx, &body)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(page))
}
