//! Repository traits (ports) - define the interface for reaction storage
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. One trait covers all four content kinds;
//! the kind is a parameter, never a separate implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewReaction, Reaction, ReactionCount, ReactionPatch};
use crate::error::DomainError;
use crate::value_objects::{
    ContentKind, CountColumn, CustomFilters, PageFilters, ReactionConditions,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Storage port for reaction rows.
///
/// All operations propagate storage failures as [`DomainError::Storage`];
/// nothing retries internally.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Fetch rows matching `conditions`, optionally restricted to a
    /// `content_id IN (...)` set, ordered by `created_at` in the requested
    /// direction. The page limit is clamped to 1000 in the store.
    async fn get(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        content_ids: Option<&[Uuid]>,
        page: &PageFilters,
        customs: &CustomFilters,
    ) -> RepoResult<Vec<Reaction>>;

    /// All reactions to one content item, storage order, limit clamped to 1000
    async fn get_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<Reaction>>;

    /// Non-null rating values for one content item, limit clamped to 5000
    async fn get_ratings_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<f64>>;

    /// Per-item count of rows where the `count_by` flag is true.
    ///
    /// Returns an empty vec without touching storage when `content_ids` is
    /// empty - callers always derive the id set from a prior fetch, and an
    /// empty prior result must not cost a round trip.
    async fn get_counts(
        &self,
        kind: ContentKind,
        content_ids: &[Uuid],
        conditions: &ReactionConditions,
        count_by: CountColumn,
    ) -> RepoResult<Vec<ReactionCount>>;

    /// Insert rows in one statement, returning the created rows.
    ///
    /// Inserts are conflict-aware on (user_id, content_id): a row that
    /// already exists is updated with the incoming values instead of
    /// erroring, so a reconcile race degrades to an update.
    async fn create_many(&self, kind: ContentKind, rows: &[NewReaction]) -> RepoResult<Vec<Reaction>>;

    /// Update all rows matching `conditions`, or - when `where_in` is given -
    /// only the (user_id, content_id) pairs listed. Always bumps
    /// `update_count` and `updated_at`. `user_view_count` is written as
    /// passed; summing is the caller's job.
    async fn update(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        patch: &ReactionPatch,
        where_in: Option<&[(Uuid, Uuid)]>,
    ) -> RepoResult<Vec<Reaction>>;

    /// Delete every row for a user in this kind, returning the count removed.
    /// Used only by account deletion.
    async fn delete_by_user(&self, kind: ContentKind, user_id: Uuid) -> RepoResult<u64>;
}
