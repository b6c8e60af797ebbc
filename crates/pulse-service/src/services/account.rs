//! Account service
//!
//! Right-to-erasure hook: purges a user's reaction rows across every content
//! kind. Deletions are per-table and independent, so they run concurrently.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::ContentKind;

use crate::dto::UserDataDeletion;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every reaction row the user owns, in all four tables.
    ///
    /// Idempotent: deleting for an unknown user succeeds with zero counts.
    #[instrument(skip(self))]
    pub async fn delete_user_data(&self, user_id: Uuid) -> ServiceResult<UserDataDeletion> {
        let repo = self.ctx.reaction_repo();
        let (posts, places, notes, gatherings) = tokio::join!(
            repo.delete_by_user(ContentKind::Post, user_id),
            repo.delete_by_user(ContentKind::Place, user_id),
            repo.delete_by_user(ContentKind::Note, user_id),
            repo.delete_by_user(ContentKind::Gathering, user_id),
        );

        let deletion = UserDataDeletion {
            post_reactions: posts?,
            place_reactions: places?,
            note_reactions: notes?,
            gathering_reactions: gatherings?,
        };

        info!(%user_id, total = deletion.total(), "User reaction data deleted");

        Ok(deletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, StubContentGateway};
    use pulse_core::{NewReaction, ReactionRepository};

    #[tokio::test]
    async fn test_deletes_across_all_kinds_and_spares_others() {
        let (ctx, repo) = test_context(StubContentGateway::default());
        let target = Uuid::new_v4();
        let bystander = Uuid::new_v4();

        for kind in [ContentKind::Post, ContentKind::Post, ContentKind::Note] {
            repo.create_many(kind, &[NewReaction::new(Uuid::new_v4(), target, "en-us")])
                .await
                .unwrap();
        }
        repo.create_many(
            ContentKind::Post,
            &[NewReaction::new(Uuid::new_v4(), bystander, "en-us")],
        )
        .await
        .unwrap();

        let deletion = AccountService::new(&ctx)
            .delete_user_data(target)
            .await
            .unwrap();

        assert_eq!(deletion.post_reactions, 2);
        assert_eq!(deletion.note_reactions, 1);
        assert_eq!(deletion.place_reactions, 0);
        assert_eq!(deletion.gathering_reactions, 0);
        assert_eq!(deletion.total(), 3);
        assert_eq!(repo.row_count(), 1, "other users' rows survive");
    }

    #[tokio::test]
    async fn test_deletion_is_idempotent() {
        let (ctx, _repo) = test_context(StubContentGateway::default());

        let deletion = AccountService::new(&ctx)
            .delete_user_data(Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(deletion.total(), 0);
    }
}
