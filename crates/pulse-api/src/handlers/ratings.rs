//! Rating handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use pulse_service::dto::RatingSummary;
use pulse_service::RatingService;

use crate::extractors::{parse_collection, Identity};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Rating summary for one content item
///
/// GET /{kind}-reactions/{content_id}/ratings
pub async fn get_rating_summary(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path((collection, content_id)): Path<(String, Uuid)>,
) -> ApiResult<Json<RatingSummary>> {
    let kind = parse_collection(&collection)?;
    if !kind.supports_ratings() {
        return Err(ApiError::invalid_path(format!(
            "Ratings are not supported for {collection}"
        )));
    }

    let service = RatingService::new(state.service_context());
    let summary = service
        .summarize(kind, content_id)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;
    Ok(Json(summary))
}
