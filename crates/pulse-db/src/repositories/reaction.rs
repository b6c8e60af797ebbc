//! PostgreSQL implementation of ReactionRepository
//!
//! One implementation serves all four content kinds. The kind resolves to a
//! table name through the closed [`ContentKind`] enum, so no identifier in
//! the generated SQL ever comes from request input. Row values always go
//! through bind parameters.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use pulse_core::{
    clamp_limit, ContentKind, CountColumn, CustomFilters, NewReaction, PageFilters, Reaction,
    ReactionConditions, ReactionCount, ReactionPatch, ReactionRepository, RepoResult,
    MAX_PAGE_LIMIT, MAX_RATINGS_LIMIT,
};

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_db_error;

/// Columns returned by every row-producing query, in model field order
const COLUMNS: &str = "content_id, user_id, user_view_count, user_has_activated, \
     user_has_liked, user_has_super_liked, user_has_disliked, user_has_super_disliked, \
     user_has_reported, user_bookmark_category, rating, user_locale, update_count, \
     created_at, updated_at";

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append `AND column = $n` clauses for every set condition
fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, conditions: &ReactionConditions) {
    if let Some(user_id) = conditions.user_id {
        builder.push(" AND user_id = ");
        builder.push_bind(user_id);
    }
    if let Some(content_id) = conditions.content_id {
        builder.push(" AND content_id = ");
        builder.push_bind(content_id);
    }
    if let Some(activated) = conditions.user_has_activated {
        builder.push(" AND user_has_activated = ");
        builder.push_bind(activated);
    }
    if let Some(reported) = conditions.user_has_reported {
        builder.push(" AND user_has_reported = ");
        builder.push_bind(reported);
    }
}

/// Append `SET` assignments for every set patch field.
///
/// `update_count` and `updated_at` are bumped unconditionally, matching the
/// row audit invariant: every update touches them even when the patch is
/// otherwise empty.
fn push_patch(builder: &mut QueryBuilder<'_, Postgres>, patch: &ReactionPatch) {
    builder.push(" SET update_count = update_count + 1, updated_at = now()");

    if let Some(count) = patch.user_view_count {
        builder.push(", user_view_count = ");
        builder.push_bind(count);
    }
    if let Some(activated) = patch.user_has_activated {
        builder.push(", user_has_activated = ");
        builder.push_bind(activated);
    }
    if let Some(liked) = patch.user_has_liked {
        builder.push(", user_has_liked = ");
        builder.push_bind(liked);
    }
    if let Some(super_liked) = patch.user_has_super_liked {
        builder.push(", user_has_super_liked = ");
        builder.push_bind(super_liked);
    }
    if let Some(disliked) = patch.user_has_disliked {
        builder.push(", user_has_disliked = ");
        builder.push_bind(disliked);
    }
    if let Some(super_disliked) = patch.user_has_super_disliked {
        builder.push(", user_has_super_disliked = ");
        builder.push_bind(super_disliked);
    }
    if let Some(reported) = patch.user_has_reported {
        builder.push(", user_has_reported = ");
        builder.push_bind(reported);
    }
    // Doubly optional: absent leaves the bookmark alone, explicit null clears it
    if let Some(category) = &patch.user_bookmark_category {
        builder.push(", user_bookmark_category = ");
        builder.push_bind(category.clone());
    }
    if let Some(rating) = patch.rating {
        builder.push(", rating = ");
        builder.push_bind(rating);
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, conditions, content_ids, customs))]
    async fn get(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        content_ids: Option<&[Uuid]>,
        page: &PageFilters,
        customs: &CustomFilters,
    ) -> RepoResult<Vec<Reaction>> {
        // An explicit empty id set can match nothing; skip the round trip
        if content_ids.is_some_and(<[Uuid]>::is_empty) {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM ");
        builder.push(kind.table());
        builder.push(" WHERE TRUE");

        push_conditions(&mut builder, conditions);

        if customs.with_bookmark {
            builder.push(" AND user_bookmark_category IS NOT NULL");
        }
        if let Some(ids) = content_ids {
            builder.push(" AND content_id = ANY(");
            builder.push_bind(ids.to_vec());
            builder.push(")");
        }

        builder.push(" ORDER BY created_at ");
        builder.push(page.order.as_sql());
        builder.push(" LIMIT ");
        builder.push_bind(page.effective_limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset.max(0));

        let rows = builder
            .build_query_as::<ReactionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<Reaction>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {table} WHERE content_id = $1 LIMIT $2",
            table = kind.table(),
        );

        let rows = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(content_id)
            .bind(clamp_limit(limit, MAX_PAGE_LIMIT))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_ratings_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<f64>> {
        let sql = format!(
            "SELECT rating FROM {table} WHERE content_id = $1 AND rating IS NOT NULL LIMIT $2",
            table = kind.table(),
        );

        sqlx::query_scalar::<_, f64>(&sql)
            .bind(content_id)
            .bind(clamp_limit(limit, MAX_RATINGS_LIMIT))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, content_ids, conditions))]
    async fn get_counts(
        &self,
        kind: ContentKind,
        content_ids: &[Uuid],
        conditions: &ReactionConditions,
        count_by: CountColumn,
    ) -> RepoResult<Vec<ReactionCount>> {
        // Callers derive the id set from a prior fetch; empty means no work
        if content_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Postgres>::new("SELECT content_id, COUNT(*) AS count FROM ");
        builder.push(kind.table());
        builder.push(" WHERE ");
        builder.push(count_by.column());
        builder.push(" = TRUE");

        push_conditions(&mut builder, conditions);

        builder.push(" AND content_id = ANY(");
        builder.push_bind(content_ids.to_vec());
        builder.push(") GROUP BY content_id");

        let rows = builder
            .build_query_as::<ReactionCountModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ReactionCount::from).collect())
    }

    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn create_many(
        &self,
        kind: ContentKind,
        rows: &[NewReaction],
    ) -> RepoResult<Vec<Reaction>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let table = kind.table();
        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO ");
        builder.push(table);
        builder.push(
            " (content_id, user_id, user_view_count, user_has_activated, user_has_liked, \
             user_has_super_liked, user_has_disliked, user_has_super_disliked, \
             user_has_reported, user_bookmark_category, rating, user_locale) ",
        );

        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.content_id)
                .push_bind(row.user_id)
                .push_bind(row.user_view_count)
                .push_bind(row.user_has_activated)
                .push_bind(row.user_has_liked)
                .push_bind(row.user_has_super_liked)
                .push_bind(row.user_has_disliked)
                .push_bind(row.user_has_super_disliked)
                .push_bind(row.user_has_reported)
                .push_bind(row.user_bookmark_category.clone())
                .push_bind(row.rating)
                .push_bind(row.user_locale.clone());
        });

        // A row created concurrently between the caller's reconcile fetch and
        // this insert degrades to an update: view counts accumulate (stays
        // monotonic) and the remaining fields take the incoming values.
        builder.push(" ON CONFLICT (user_id, content_id) DO UPDATE SET user_view_count = ");
        builder.push(table);
        builder.push(
            ".user_view_count + EXCLUDED.user_view_count, \
             user_has_activated = EXCLUDED.user_has_activated, \
             user_has_liked = EXCLUDED.user_has_liked, \
             user_has_super_liked = EXCLUDED.user_has_super_liked, \
             user_has_disliked = EXCLUDED.user_has_disliked, \
             user_has_super_disliked = EXCLUDED.user_has_super_disliked, \
             user_has_reported = EXCLUDED.user_has_reported, \
             user_bookmark_category = EXCLUDED.user_bookmark_category, \
             rating = EXCLUDED.rating, \
             user_locale = EXCLUDED.user_locale, \
             update_count = ",
        );
        builder.push(table);
        builder.push(".update_count + 1, updated_at = now() RETURNING ");
        builder.push(COLUMNS);

        let created = builder
            .build_query_as::<ReactionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(created.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self, conditions, patch, where_in))]
    async fn update(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        patch: &ReactionPatch,
        where_in: Option<&[(Uuid, Uuid)]>,
    ) -> RepoResult<Vec<Reaction>> {
        // An explicit empty pair set targets nothing
        if where_in.is_some_and(<[(Uuid, Uuid)]>::is_empty) {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE ");
        builder.push(kind.table());

        push_patch(&mut builder, patch);

        builder.push(" WHERE TRUE");
        push_conditions(&mut builder, conditions);

        if let Some(pairs) = where_in {
            builder.push(" AND (user_id, content_id) IN (");
            let mut separated = builder.separated(", ");
            for (user_id, content_id) in pairs {
                separated.push("(");
                separated.push_bind_unseparated(*user_id);
                separated.push_unseparated(", ");
                separated.push_bind_unseparated(*content_id);
                separated.push_unseparated(")");
            }
            builder.push(")");
        }

        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let updated = builder
            .build_query_as::<ReactionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(updated.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, kind: ContentKind, user_id: Uuid) -> RepoResult<u64> {
        let sql = format!("DELETE FROM {table} WHERE user_id = $1", table = kind.table());

        let result = sqlx::query(&sql)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
