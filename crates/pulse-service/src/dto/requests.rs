//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use pulse_core::{PageFilters, ReactionPatch, SortOrder};

fn default_feed_limit() -> i64 {
    21
}

fn default_true() -> bool {
    true
}

/// Keeps "field absent" and "field explicitly null" distinguishable: a
/// present field always lands in the outer `Some`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Option::<String>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// The settable reaction fields for create-or-update operations.
///
/// `userViewCount` is a delta, not an absolute value; the reconciler sums it
/// onto the existing row. `userBookmarkCategory` is doubly optional: absent
/// leaves the bookmark untouched, explicit null clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPatchRequest {
    #[validate(range(min = 0, message = "View count delta must be non-negative"))]
    #[serde(default)]
    pub user_view_count: Option<i32>,

    #[serde(default)]
    pub user_has_activated: Option<bool>,

    #[serde(default)]
    pub user_has_liked: Option<bool>,

    #[serde(default)]
    pub user_has_super_liked: Option<bool>,

    #[serde(default)]
    pub user_has_disliked: Option<bool>,

    #[serde(default)]
    pub user_has_super_disliked: Option<bool>,

    #[serde(default)]
    pub user_has_reported: Option<bool>,

    #[serde(default, deserialize_with = "double_option")]
    pub user_bookmark_category: Option<Option<String>>,

    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    #[serde(default)]
    pub rating: Option<f64>,
}

impl ReactionPatchRequest {
    /// Convert into the domain patch type
    #[must_use]
    pub fn into_patch(self) -> ReactionPatch {
        ReactionPatch {
            user_view_count: self.user_view_count,
            user_has_activated: self.user_has_activated,
            user_has_liked: self.user_has_liked,
            user_has_super_liked: self.user_has_super_liked,
            user_has_disliked: self.user_has_disliked,
            user_has_super_disliked: self.user_has_super_disliked,
            user_has_reported: self.user_has_reported,
            user_bookmark_category: self.user_bookmark_category,
            rating: self.rating,
        }
    }
}

/// Batch create-or-update request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchReactionRequest {
    #[validate(length(min = 1, max = 500, message = "Must target 1-500 content ids"))]
    pub content_ids: Vec<Uuid>,

    #[validate(nested)]
    #[serde(flatten)]
    pub patch: ReactionPatchRequest,
}

/// Query parameters for listing the requesting user's own reactions.
///
/// `contentIds` is a comma-separated list because this rides on a GET.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnReactionsQuery {
    #[serde(default)]
    pub content_ids: Option<String>,

    #[validate(range(min = 1, message = "Limit must be positive"))]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub offset: Option<i64>,

    #[serde(default)]
    pub order: Option<SortOrder>,
}

impl OwnReactionsQuery {
    /// Parse the comma-separated id list, rejecting malformed entries
    pub fn parse_content_ids(&self) -> Result<Option<Vec<Uuid>>, uuid::Error> {
        match &self.content_ids {
            None => Ok(None),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Uuid::parse_str)
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
        }
    }

    /// Page window with defaults applied
    #[must_use]
    pub fn page(&self) -> PageFilters {
        PageFilters::new(
            self.limit.unwrap_or(100),
            self.offset.unwrap_or(0),
            self.order.unwrap_or_default(),
        )
    }
}

/// Filtered reaction listing used by internal callers
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FindReactionsRequest {
    #[serde(default)]
    pub content_ids: Option<Vec<Uuid>>,

    #[serde(default)]
    pub user_has_activated: Option<bool>,

    #[validate(range(min = 1, message = "Limit must be positive"))]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub offset: Option<i64>,

    #[serde(default)]
    pub order: Option<SortOrder>,
}

impl FindReactionsRequest {
    /// Page window with defaults applied
    #[must_use]
    pub fn page(&self) -> PageFilters {
        PageFilters::new(
            self.limit.unwrap_or(100),
            self.offset.unwrap_or(0),
            self.order.unwrap_or_default(),
        )
    }
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Paginated feed search (active and bookmarked modes)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedSearchRequest {
    #[validate(range(min = 1, max = 1000, message = "Limit must be 1-1000"))]
    #[serde(default = "default_feed_limit")]
    pub limit: i64,

    #[serde(default)]
    pub offset: i64,

    #[serde(default)]
    pub order: SortOrder,

    #[serde(default)]
    pub blocked_users: Vec<Uuid>,

    #[serde(default)]
    pub should_hide_mature_content: bool,

    #[serde(default = "default_true")]
    pub with_media: bool,

    #[serde(default = "default_true")]
    pub with_user: bool,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    #[serde(default)]
    pub user_latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    #[serde(default)]
    pub user_longitude: Option<f64>,

    #[serde(default)]
    pub last_content_created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author_id: Option<Uuid>,
}

impl Default for FeedSearchRequest {
    fn default() -> Self {
        Self {
            limit: default_feed_limit(),
            offset: 0,
            order: SortOrder::default(),
            blocked_users: Vec::new(),
            should_hide_mature_content: false,
            with_media: true,
            with_user: true,
            user_latitude: None,
            user_longitude: None,
            last_content_created_at: None,
            author_id: None,
        }
    }
}

impl FeedSearchRequest {
    /// Page window for the reaction fetch
    #[must_use]
    pub fn page(&self) -> PageFilters {
        PageFilters::new(self.limit, self.offset, self.order)
    }
}

/// Targeted refresh of already-known content items; no pagination
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedByIdsRequest {
    #[validate(length(min = 1, max = 100, message = "Must target 1-100 content ids"))]
    pub content_ids: Vec<Uuid>,

    #[serde(default)]
    pub blocked_users: Vec<Uuid>,

    #[serde(default)]
    pub should_hide_mature_content: bool,

    #[serde(default = "default_true")]
    pub with_media: bool,

    #[serde(default = "default_true")]
    pub with_user: bool,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    #[serde(default)]
    pub user_latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    #[serde(default)]
    pub user_longitude: Option<f64>,
}
