//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the per-kind reaction tables.
///
/// `post_reactions`, `place_reactions`, `note_reactions`, and
/// `gathering_reactions` all share this shape.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub content_id: Uuid,
    pub user_id: Uuid,
    pub user_view_count: i32,
    pub user_has_activated: bool,
    pub user_has_liked: bool,
    pub user_has_super_liked: bool,
    pub user_has_disliked: bool,
    pub user_has_super_disliked: bool,
    pub user_has_reported: bool,
    pub user_bookmark_category: Option<String>,
    pub rating: Option<f64>,
    pub user_locale: String,
    pub update_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated per-item flag count (from a GROUP BY query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub content_id: Uuid,
    pub count: i64,
}
