//! Response DTOs for API endpoints

use serde::Serialize;
use serde_json::{Map, Value};

use pulse_core::{ContentItem, Reaction};

/// One feed entry: a hydrated content item plus the requester's reaction
/// state and derived display fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(flatten)]
    pub content: ContentItem,

    /// The requesting user's reaction row; None when the gateway returned an
    /// item the user has no row for (possible in the by-ids mode)
    pub reaction: Option<Reaction>,

    pub like_count: i64,

    /// Human-readable distance from the requesting user, when both sides
    /// have coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

/// Offset pagination descriptor for feed pages
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub items_per_page: i64,
    pub offset: i64,
    pub is_last_page: bool,
}

/// One page of an aggregated feed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub media: Map<String, Value>,
    /// Absent in the by-ids mode, which is not a scrolling feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Average rating for one content item
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Rounded half-up to one decimal; null when nothing is rated
    pub avg_rating: Option<f64>,
    pub total_ratings: i64,
}

/// Result of a batch create-or-update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileOutcome {
    pub created: Vec<Reaction>,
    pub updated: Vec<Reaction>,
}

/// Per-kind deleted row counts from the account-deletion hook
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDataDeletion {
    pub post_reactions: u64,
    pub place_reactions: u64,
    pub note_reactions: u64,
    pub gathering_reactions: u64,
}

impl UserDataDeletion {
    /// Total rows removed across all kinds
    #[must_use]
    pub fn total(&self) -> u64 {
        self.post_reactions + self.place_reactions + self.note_reactions + self.gathering_reactions
    }
}
