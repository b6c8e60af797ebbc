//! Reaction entity - one user's engagement state for one content item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reaction row: at most one per (user, content item) per content kind.
///
/// Every form of engagement lives on the same row: views, the like/dislike
/// flags, bookmarks, reports, activation, and (for places) a rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub content_id: Uuid,
    pub user_id: Uuid,
    /// Monotonically non-decreasing; incremented by the delta on each update
    pub user_view_count: i32,
    pub user_has_activated: bool,
    pub user_has_liked: bool,
    pub user_has_super_liked: bool,
    pub user_has_disliked: bool,
    pub user_has_super_disliked: bool,
    pub user_has_reported: bool,
    /// Non-null means bookmarked under this category
    pub user_bookmark_category: Option<String>,
    /// 1..=5, only meaningful for the place kind
    pub rating: Option<f64>,
    /// Locale of the reacting user at the time of the last write
    pub user_locale: String,
    /// Incremented on every update; audit only, never used for conflict resolution
    pub update_count: i32,
    /// Immutable once set; the feed pagination sort key
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Whether this row represents a bookmark
    #[inline]
    #[must_use]
    pub fn is_bookmarked(&self) -> bool {
        self.user_bookmark_category.is_some()
    }
}

/// Aggregated per-item count of rows with a given boolean flag set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCount {
    pub content_id: Uuid,
    pub count: i64,
}

/// Fields settable when creating a reaction row
#[derive(Debug, Clone, PartialEq)]
pub struct NewReaction {
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
}

impl NewReaction {
    /// A blank row for (user, content), then shaped by [`NewReaction::apply`]
    #[must_use]
    pub fn new(content_id: Uuid, user_id: Uuid, user_locale: impl Into<String>) -> Self {
        Self {
            content_id,
            user_id,
            user_view_count: 0,
            user_has_activated: false,
            user_has_liked: false,
            user_has_super_liked: false,
            user_has_disliked: false,
            user_has_super_disliked: false,
            user_has_reported: false,
            user_bookmark_category: None,
            rating: None,
            user_locale: user_locale.into(),
        }
    }

    /// Apply a patch's set fields on top of the defaults
    #[must_use]
    pub fn apply(mut self, patch: &ReactionPatch) -> Self {
        if let Some(v) = patch.user_view_count {
            self.user_view_count = v;
        }
        if let Some(v) = patch.user_has_activated {
            self.user_has_activated = v;
        }
        if let Some(v) = patch.user_has_liked {
            self.user_has_liked = v;
        }
        if let Some(v) = patch.user_has_super_liked {
            self.user_has_super_liked = v;
        }
        if let Some(v) = patch.user_has_disliked {
            self.user_has_disliked = v;
        }
        if let Some(v) = patch.user_has_super_disliked {
            self.user_has_super_disliked = v;
        }
        if let Some(v) = patch.user_has_reported {
            self.user_has_reported = v;
        }
        if let Some(v) = &patch.user_bookmark_category {
            self.user_bookmark_category.clone_from(v);
        }
        if let Some(v) = patch.rating {
            self.rating = Some(v);
        }
        self
    }
}

/// Partial update for reaction rows.
///
/// `None` fields are left untouched. `user_bookmark_category` is doubly
/// optional: absent leaves it alone, an explicit null clears the bookmark.
/// `user_view_count`, when set, is the already-summed value - the store never
/// recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPatch {
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
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Keeps "field absent" and "field explicitly null" distinguishable: a
/// present field always lands in the outer `Some`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ReactionPatch {
    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of this patch with the view count replaced by a summed value
    #[must_use]
    pub fn with_view_count(mut self, total: i32) -> Self {
        self.user_view_count = Some(total);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reaction_defaults() {
        let row = NewReaction::new(Uuid::new_v4(), Uuid::new_v4(), "en-us");
        assert_eq!(row.user_view_count, 0);
        assert!(!row.user_has_activated);
        assert!(row.rating.is_none());
    }

    #[test]
    fn test_apply_patch() {
        let patch = ReactionPatch {
            user_has_liked: Some(true),
            user_view_count: Some(3),
            user_bookmark_category: Some(Some("favorites".to_string())),
            ..ReactionPatch::default()
        };
        let row = NewReaction::new(Uuid::new_v4(), Uuid::new_v4(), "en-us").apply(&patch);
        assert!(row.user_has_liked);
        assert_eq!(row.user_view_count, 3);
        assert_eq!(row.user_bookmark_category.as_deref(), Some("favorites"));
        assert!(!row.user_has_disliked);
    }

    #[test]
    fn test_patch_bookmark_null_vs_absent() {
        // Absent field leaves the bookmark untouched; explicit null clears it
        let absent: ReactionPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.user_bookmark_category, None);

        let cleared: ReactionPatch =
            serde_json::from_str(r#"{"userBookmarkCategory": null}"#).unwrap();
        assert_eq!(cleared.user_bookmark_category, Some(None));

        let set: ReactionPatch =
            serde_json::from_str(r#"{"userBookmarkCategory": "trips"}"#).unwrap();
        assert_eq!(set.user_bookmark_category, Some(Some("trips".to_string())));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ReactionPatch::default().is_empty());
        let patch = ReactionPatch {
            user_has_liked: Some(false),
            ..ReactionPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
