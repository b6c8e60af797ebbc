//! Reconcile service
//!
//! Create-or-update for reaction rows, single and batch, preserving the
//! one-row-per-(user, content) invariant. The batch path splits the target
//! id set into an update subset and a create subset from one fetch, then
//! issues exactly one statement per subset.

use std::collections::HashSet;

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::{
    ContentKind, CustomFilters, NewReaction, PageFilters, Reaction, ReactionConditions,
    ReactionPatch, RequestContext, SortOrder,
};

use crate::dto::ReconcileOutcome;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reconcile service
pub struct ReconcileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconcileService<'a> {
    /// Create a new ReconcileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create or update the requesting user's reaction to one content item.
    ///
    /// When a row exists, the view-count delta in the patch is summed onto
    /// the stored value before the update; the store itself never recomputes
    /// view counts.
    #[instrument(skip(self, rctx, patch), fields(user_id = %rctx.user_id))]
    pub async fn create_or_update(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        content_id: Uuid,
        patch: &ReactionPatch,
    ) -> ServiceResult<Reaction> {
        let conditions = ReactionConditions::for_user(rctx.user_id).with_content_id(content_id);
        let existing = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &conditions,
                None,
                &PageFilters::new(1, 0, SortOrder::Desc),
                &CustomFilters::default(),
            )
            .await?;

        if let Some(row) = existing.into_iter().next() {
            let effective = match patch.user_view_count {
                Some(delta) => patch
                    .clone()
                    .with_view_count(row.user_view_count.saturating_add(delta)),
                None => patch.clone(),
            };
            let updated = self
                .ctx
                .reaction_repo()
                .update(kind, &conditions, &effective, None)
                .await?;

            return updated
                .into_iter()
                .next()
                .ok_or_else(|| ServiceError::internal("update returned no row"));
        }

        let row = NewReaction::new(content_id, rctx.user_id, rctx.locale.clone()).apply(patch);
        let created = self.ctx.reaction_repo().create_many(kind, &[row]).await?;

        info!(%content_id, kind = %kind, "Reaction created");

        created
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::internal("insert returned no row"))
    }

    /// Batch create-or-update against a target id set with one shared patch.
    ///
    /// One fetch determines which (user, content) pairs already exist; the
    /// existing subset gets a single pair-targeted update, the missing
    /// subset a single multi-row insert. The two statements touch disjoint
    /// key sets, so they run concurrently; both complete before returning.
    #[instrument(skip(self, rctx, patch), fields(user_id = %rctx.user_id, ids = content_ids.len()))]
    pub async fn create_or_update_many(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        content_ids: &[Uuid],
        patch: &ReactionPatch,
    ) -> ServiceResult<ReconcileOutcome> {
        if content_ids.is_empty() {
            return Ok(ReconcileOutcome {
                created: Vec::new(),
                updated: Vec::new(),
            });
        }

        let conditions = ReactionConditions::for_user(rctx.user_id);
        let existing = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &conditions,
                Some(content_ids),
                &PageFilters::new(content_ids.len() as i64, 0, SortOrder::Desc),
                &CustomFilters::default(),
            )
            .await?;

        let existing_ids: HashSet<Uuid> = existing.iter().map(|r| r.content_id).collect();

        let update_pairs: Vec<(Uuid, Uuid)> = existing_ids
            .iter()
            .map(|content_id| (rctx.user_id, *content_id))
            .collect();

        let create_rows: Vec<NewReaction> = content_ids
            .iter()
            .filter(|id| !existing_ids.contains(id))
            .map(|id| NewReaction::new(*id, rctx.user_id, rctx.locale.clone()).apply(patch))
            .collect();

        let (updated, created) = tokio::join!(
            self.ctx
                .reaction_repo()
                .update(kind, &conditions, patch, Some(&update_pairs)),
            self.ctx.reaction_repo().create_many(kind, &create_rows),
        );
        let (updated, created) = (updated?, created?);

        info!(
            kind = %kind,
            created = created.len(),
            updated = updated.len(),
            "Batch reconcile complete"
        );

        Ok(ReconcileOutcome { created, updated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, StubContentGateway};
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_create_then_update_sums_view_counts() {
        let (ctx, _repo) = test_context(StubContentGateway::default());
        let service = ReconcileService::new(&ctx);
        let rctx = RequestContext::new(Uuid::new_v4());
        let content_id = Uuid::new_v4();

        let patch = ReactionPatch {
            user_view_count: Some(2),
            user_has_liked: Some(true),
            ..ReactionPatch::default()
        };
        let created = service
            .create_or_update(ContentKind::Post, &rctx, content_id, &patch)
            .await
            .unwrap();
        assert_eq!(created.user_view_count, 2);
        assert!(created.user_has_liked);

        let patch = ReactionPatch {
            user_view_count: Some(3),
            ..ReactionPatch::default()
        };
        let updated = service
            .create_or_update(ContentKind::Post, &rctx, content_id, &patch)
            .await
            .unwrap();
        assert_eq!(updated.user_view_count, 5);
        assert!(updated.user_has_liked, "unrelated fields survive the patch");
        assert_eq!(updated.update_count, 1);
    }

    #[tokio::test]
    async fn test_batch_split_covers_input_with_no_overlap() {
        let (ctx, _repo) = test_context(StubContentGateway::default());
        let service = ReconcileService::new(&ctx);
        let rctx = RequestContext::new(Uuid::new_v4());

        let known_a = Uuid::new_v4();
        let known_b = Uuid::new_v4();
        let fresh = Uuid::new_v4();

        let seed = ReactionPatch {
            user_has_activated: Some(true),
            ..ReactionPatch::default()
        };
        service
            .create_or_update_many(ContentKind::Note, &rctx, &[known_a, known_b], &seed)
            .await
            .unwrap();

        let patch = ReactionPatch {
            user_has_liked: Some(true),
            ..ReactionPatch::default()
        };
        let outcome = service
            .create_or_update_many(ContentKind::Note, &rctx, &[known_a, known_b, fresh], &patch)
            .await
            .unwrap();

        let updated_ids: HashSet<Uuid> = outcome.updated.iter().map(|r| r.content_id).collect();
        let created_ids: HashSet<Uuid> = outcome.created.iter().map(|r| r.content_id).collect();

        assert_eq!(updated_ids, HashSet::from([known_a, known_b]));
        assert_eq!(created_ids, HashSet::from([fresh]));
        assert!(updated_ids.is_disjoint(&created_ids));
        assert!(outcome.updated.iter().all(|r| r.update_count == 1));
        assert!(outcome.created.iter().all(|r| r.update_count == 0));
    }

    #[tokio::test]
    async fn test_batch_with_all_new_ids_only_creates() {
        let (ctx, _repo) = test_context(StubContentGateway::default());
        let service = ReconcileService::new(&ctx);
        let rctx = RequestContext::new(Uuid::new_v4());

        let patch = ReactionPatch {
            user_has_activated: Some(true),
            ..ReactionPatch::default()
        };
        let outcome = service
            .create_or_update_many(
                ContentKind::Gathering,
                &rctx,
                &[Uuid::new_v4(), Uuid::new_v4()],
                &patch,
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        assert!(outcome.updated.is_empty());
        assert!(outcome.created.iter().all(|r| r.user_has_activated));
    }

    #[tokio::test]
    async fn test_empty_id_set_is_noop() {
        let (ctx, repo) = test_context(StubContentGateway::default());
        let service = ReconcileService::new(&ctx);
        let rctx = RequestContext::new(Uuid::new_v4());

        let outcome = service
            .create_or_update_many(ContentKind::Post, &rctx, &[], &ReactionPatch::default())
            .await
            .unwrap();
        assert!(outcome.created.is_empty());
        assert!(outcome.updated.is_empty());
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn test_new_row_carries_request_locale() {
        let (ctx, _repo) = test_context(StubContentGateway::default());
        let service = ReconcileService::new(&ctx);
        let rctx = RequestContext::new(Uuid::new_v4()).with_locale("es-mx");

        let created = service
            .create_or_update(
                ContentKind::Place,
                &rctx,
                Uuid::new_v4(),
                &ReactionPatch::default(),
            )
            .await
            .unwrap();
        assert_eq!(created.user_locale, "es-mx");
    }
}
