//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1. Reaction
//! collections share one parameterized route set; the `{kind}-reactions`
//! segment is parsed in the handlers.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{feeds, health, ratings, reactions, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(reaction_routes()).merge(user_routes())
}

/// Reaction collection routes, shared by all four content kinds
fn reaction_routes() -> Router<AppState> {
    Router::new()
        // Reconciliation
        .route("/:collection", post(reactions::create_or_update_many))
        .route("/:collection/:content_id", post(reactions::create_or_update))
        // Listings
        .route("/:collection", get(reactions::get_own_reactions))
        .route("/:collection/find", post(reactions::find_reactions))
        .route(
            "/:collection/:content_id",
            get(reactions::get_reactions_by_content_id),
        )
        // Ratings
        .route(
            "/:collection/:content_id/ratings",
            get(ratings::get_rating_summary),
        )
        // Feeds
        .route("/:collection/active/search", post(feeds::search_active))
        .route(
            "/:collection/active/search-by-ids",
            post(feeds::search_active_by_ids),
        )
        .route(
            "/:collection/bookmarked/search",
            post(feeds::search_bookmarked),
        )
}

/// User data routes
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/:user_id/reactions",
        delete(users::delete_user_reactions),
    )
}
