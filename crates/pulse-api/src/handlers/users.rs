//! User data handlers
//!
//! Account-deletion hook invoked by the users service.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use pulse_common::translate;
use pulse_service::dto::UserDataDeletion;
use pulse_service::AccountService;

use crate::extractors::Identity;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Response body for the account-deletion hook
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataDeletionResponse {
    pub message: String,
    pub deleted: UserDataDeletion,
}

/// Delete every reaction row a user owns, across all content kinds
///
/// DELETE /users/{user_id}/reactions
pub async fn delete_user_reactions(
    State(state): State<AppState>,
    Identity(ctx): Identity,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserDataDeletionResponse>> {
    let service = AccountService::new(state.service_context());
    let deleted = service
        .delete_user_data(user_id)
        .await
        .map_err(|e| ApiError::from_service(e, &ctx.locale))?;

    Ok(Json(UserDataDeletionResponse {
        message: translate(&ctx.locale, "user.dataDeleted"),
        deleted,
    }))
}
