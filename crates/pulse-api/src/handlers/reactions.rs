//! Reaction handlers
//!
//! Create-or-update and listing endpoints for per-user reaction rows.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use pulse_core::Reaction;
use pulse_service::dto::{
    BatchReactionRequest, FindReactionsRequest, OwnReactionsQuery, ReactionPatchRequest,
    ReconcileOutcome,
};
use pulse_service::{FeedService, ReconcileService};

use crate::extractors::{parse_collection, Identity, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Create or update one reaction
///
/// POST /{kind}-reactions/{content_id}
pub async fn create_or_update(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path((collection, content_id)): Path<(String, Uuid)>,
    ValidatedJson(body): ValidatedJson<ReactionPatchRequest>,
) -> ApiResult<Json<Reaction>> {
    let kind = parse_collection(&collection)?;

    let service = ReconcileService::new(state.service_context());
    let reaction = service
        .create_or_update(kind, &ctx, content_id, &body.into_patch())
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(reaction))
}

/// Batch create-or-update against a target id set
///
/// POST /{kind}-reactions
pub async fn create_or_update_many(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    ValidatedJson(body): ValidatedJson<BatchReactionRequest>,
) -> ApiResult<Json<ReconcileOutcome>> {
    let kind = parse_collection(&collection)?;

    let service = ReconcileService::new(state.service_context());
    let outcome = service
        .create_or_update_many(kind, &ctx, &body.content_ids, &body.patch.into_patch())
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(outcome))
}

/// The requesting user's own reactions
///
/// GET /{kind}-reactions
pub async fn get_own_reactions(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    Query(query): Query<OwnReactionsQuery>,
) -> ApiResult<Json<Vec<Reaction>>> {
    let kind = parse_collection(&collection)?;
    let content_ids = query
        .parse_content_ids()
        .map_err(|e| ApiError::invalid_query(format!("contentIds: {e}")))?;

    let service = FeedService::new(state.service_context());
    let reactions = service
        .get_reactions(kind, &ctx, content_ids.as_deref(), &query.page())
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(reactions))
}

/// Filtered listing of the requesting user's reactions
///
/// POST /{kind}-reactions/find
pub async fn find_reactions(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(collection): Path<String>,
    ValidatedJson(body): ValidatedJson<FindReactionsRequest>,
) -> ApiResult<Json<Vec<Reaction>>> {
    let kind = parse_collection(&collection)?;

    let service = FeedService::new(state.service_context());
    let reactions = service
        .find_reactions(kind, &ctx, &body)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(reactions))
}

/// Every reaction to one content item; requires the requester to have an
/// activated reaction to it
///
/// GET /{kind}-reactions/{content_id}
pub async fn get_reactions_by_content_id(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path((collection, content_id)): Path<(String, Uuid)>,
    Query(query): Query<OwnReactionsQuery>,
) -> ApiResult<Json<Vec<Reaction>>> {
    let kind = parse_collection(&collection)?;

    let service = FeedService::new(state.service_context());
    let reactions = service
        .get_reactions_by_content_id(kind, &ctx, content_id, query.limit.unwrap_or(100))
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(reactions))
}
