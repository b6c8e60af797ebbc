//! Query filters - conditions, pagination, and count selectors for the reaction store

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on rows returned by a single `get`/`get_by_content_id` call.
/// Resource protection; enforced in the store regardless of the requested limit.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Hard cap on rows returned by a single ratings fetch.
pub const MAX_RATINGS_LIMIT: i64 = 5000;

/// Sort direction for `created_at` ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Exact-match filter on reaction rows.
///
/// Only the fields callers actually filter on are representable; everything
/// else stays out of the WHERE clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionConditions {
    pub user_id: Option<Uuid>,
    pub content_id: Option<Uuid>,
    pub user_has_activated: Option<bool>,
    pub user_has_reported: Option<bool>,
}

impl ReactionConditions {
    /// Conditions scoped to one user
    #[must_use]
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Restrict to a single content item
    #[must_use]
    pub fn with_content_id(mut self, content_id: Uuid) -> Self {
        self.content_id = Some(content_id);
        self
    }

    /// Restrict to activated (or not-activated) rows
    #[must_use]
    pub fn activated(mut self, value: bool) -> Self {
        self.user_has_activated = Some(value);
        self
    }

    /// Restrict on the reported flag
    #[must_use]
    pub fn reported(mut self, value: bool) -> Self {
        self.user_has_reported = Some(value);
        self
    }

    /// True when no condition is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Offset pagination window for reaction fetches
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageFilters {
    pub limit: i64,
    pub offset: i64,
    #[serde(default)]
    pub order: SortOrder,
}

impl Default for PageFilters {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            order: SortOrder::Desc,
        }
    }
}

impl PageFilters {
    /// Create a page window with the default descending order
    #[must_use]
    pub fn new(limit: i64, offset: i64, order: SortOrder) -> Self {
        Self { limit, offset, order }
    }

    /// The limit actually sent to the store, clamped to [`MAX_PAGE_LIMIT`]
    #[must_use]
    pub fn effective_limit(&self) -> i64 {
        clamp_limit(self.limit, MAX_PAGE_LIMIT)
    }
}

/// Clamp a requested limit into `1..=max`, treating non-positive as the default 100
#[must_use]
pub fn clamp_limit(limit: i64, max: i64) -> i64 {
    if limit <= 0 {
        100
    } else {
        limit.min(max)
    }
}

/// Non-column filters that change query shape
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CustomFilters {
    /// Restrict to bookmarked rows (`user_bookmark_category IS NOT NULL`)
    #[serde(default)]
    pub with_bookmark: bool,
}

impl CustomFilters {
    /// Filters restricted to bookmarked rows
    #[must_use]
    pub fn bookmarked() -> Self {
        Self { with_bookmark: true }
    }
}

/// Boolean column a count query groups on.
///
/// Closed enum so the column name can never come from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountColumn {
    #[default]
    UserHasLiked,
    UserHasSuperLiked,
    UserHasDisliked,
    UserHasSuperDisliked,
    UserHasActivated,
    UserHasReported,
}

impl CountColumn {
    /// The backing column name
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::UserHasLiked => "user_has_liked",
            Self::UserHasSuperLiked => "user_has_super_liked",
            Self::UserHasDisliked => "user_has_disliked",
            Self::UserHasSuperDisliked => "user_has_super_disliked",
            Self::UserHasActivated => "user_has_activated",
            Self::UserHasReported => "user_has_reported",
        }
    }
}
