//! Feed service
//!
//! Assembles paginated content feeds by joining locally-owned reaction rows
//! with content records fetched from the remote content-management service.
//!
//! The reaction table is the authoritative ordering source; the gateway is a
//! hydration lookup. The two are independently paginated, so the end-of-feed
//! flag requires both sources to signal exhaustion.

use std::collections::HashMap;

use tracing::{instrument, warn};
use uuid::Uuid;

use pulse_core::{
    readable_distance, ContentBatch, ContentKind, ContentQuery, CountColumn, CustomFilters,
    DomainError, GeoPoint, PageFilters, Reaction, ReactionConditions, RequestContext, SortOrder,
};

use crate::dto::{FeedByIdsRequest, FeedItem, FeedPage, FeedSearchRequest, FindReactionsRequest, Pagination};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upper bound on the gateway request in the by-ids mode
const BY_IDS_CAP: usize = 100;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Paginated feed of content the requesting user has activated
    #[instrument(skip(self, rctx, request), fields(user_id = %rctx.user_id))]
    pub async fn search_active(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        request: &FeedSearchRequest,
    ) -> ServiceResult<FeedPage> {
        self.search_feed(kind, rctx, request, &CustomFilters::default())
            .await
    }

    /// Paginated feed restricted to bookmarked reactions
    #[instrument(skip(self, rctx, request), fields(user_id = %rctx.user_id))]
    pub async fn search_bookmarked(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        request: &FeedSearchRequest,
    ) -> ServiceResult<FeedPage> {
        self.search_feed(kind, rctx, request, &CustomFilters::bookmarked())
            .await
    }

    async fn search_feed(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        request: &FeedSearchRequest,
        customs: &CustomFilters,
    ) -> ServiceResult<FeedPage> {
        let conditions = active_conditions(rctx.user_id, request.should_hide_mature_content);
        let page = request.page();

        let reactions = self
            .ctx
            .reaction_repo()
            .get(kind, &conditions, None, &page, customs)
            .await?;

        let content_ids: Vec<Uuid> = reactions.iter().map(|r| r.content_id).collect();

        let batch = if content_ids.is_empty() {
            ContentBatch::default()
        } else {
            self.ctx
                .content_gateway()
                .find_by_ids(
                    rctx,
                    ContentQuery {
                        content_ids,
                        limit: request.limit,
                        order: request.order,
                        with_media: request.with_media,
                        with_user: request.with_user,
                        last_content_created_at: request.last_content_created_at,
                        author_id: request.author_id,
                        is_draft: false,
                    },
                )
                .await
                .map_err(DomainError::from)?
        };

        // Both sources must independently signal exhaustion; reaction rows
        // and content rows can diverge (orphaned reactions, gateway-side
        // filtering), and either alone under- or over-reports the last page.
        let is_last_page = (reactions.len() as i64) < request.limit
            && (batch.items.len() as i64) < request.limit;

        let counts = self.like_counts(kind, &batch).await;
        let items = merge_items(
            batch.items,
            &reactions,
            &counts,
            user_point(request.user_latitude, request.user_longitude),
            &request.blocked_users,
        );

        Ok(FeedPage {
            items,
            media: batch.media,
            pagination: Some(Pagination {
                items_per_page: request.limit,
                offset: request.offset,
                is_last_page,
            }),
        })
    }

    /// Targeted refresh of an explicit id set. Not a scrolling feed: no
    /// offset pagination, and only the activated subset of the requested ids
    /// is hydrated, capped at 100.
    #[instrument(skip(self, rctx, request), fields(user_id = %rctx.user_id, ids = request.content_ids.len()))]
    pub async fn search_active_by_ids(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        request: &FeedByIdsRequest,
    ) -> ServiceResult<FeedPage> {
        let conditions = active_conditions(rctx.user_id, request.should_hide_mature_content);
        let ids: Vec<Uuid> = request.content_ids.iter().copied().take(BY_IDS_CAP).collect();

        let reactions = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &conditions,
                Some(&ids),
                &PageFilters::new(ids.len() as i64, 0, SortOrder::Desc),
                &CustomFilters::default(),
            )
            .await?;

        // Re-derive the activated subset; the caller's list is a claim, the
        // reaction rows are the source of truth
        let activated_ids: Vec<Uuid> = reactions.iter().map(|r| r.content_id).collect();

        let batch = if activated_ids.is_empty() {
            ContentBatch::default()
        } else {
            self.ctx
                .content_gateway()
                .find_by_ids(
                    rctx,
                    ContentQuery {
                        limit: activated_ids.len() as i64,
                        content_ids: activated_ids,
                        order: SortOrder::Desc,
                        with_media: request.with_media,
                        with_user: request.with_user,
                        last_content_created_at: None,
                        author_id: None,
                        is_draft: false,
                    },
                )
                .await
                .map_err(DomainError::from)?
        };

        let counts = self.like_counts(kind, &batch).await;
        let items = merge_items(
            batch.items,
            &reactions,
            &counts,
            user_point(request.user_latitude, request.user_longitude),
            &request.blocked_users,
        );

        Ok(FeedPage {
            items,
            media: batch.media,
            pagination: None,
        })
    }

    /// The requesting user's own reaction rows, no content join
    #[instrument(skip(self, rctx, content_ids, page), fields(user_id = %rctx.user_id))]
    pub async fn get_reactions(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        content_ids: Option<&[Uuid]>,
        page: &PageFilters,
    ) -> ServiceResult<Vec<Reaction>> {
        let rows = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &ReactionConditions::for_user(rctx.user_id),
                content_ids,
                page,
                &CustomFilters::default(),
            )
            .await?;
        Ok(rows)
    }

    /// Filtered listing of the requesting user's reactions
    #[instrument(skip(self, rctx, request), fields(user_id = %rctx.user_id))]
    pub async fn find_reactions(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        request: &FindReactionsRequest,
    ) -> ServiceResult<Vec<Reaction>> {
        let mut conditions = ReactionConditions::for_user(rctx.user_id);
        if let Some(activated) = request.user_has_activated {
            conditions = conditions.activated(activated);
        }

        let rows = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &conditions,
                request.content_ids.as_deref(),
                &request.page(),
                &CustomFilters::default(),
            )
            .await?;
        Ok(rows)
    }

    /// Every reaction to one content item, for rendering who-reacted views.
    ///
    /// The requester must have an activated reaction to the item; otherwise
    /// this is a 403-equivalent domain error.
    #[instrument(skip(self, rctx), fields(user_id = %rctx.user_id))]
    pub async fn get_reactions_by_content_id(
        &self,
        kind: ContentKind,
        rctx: &RequestContext,
        content_id: Uuid,
        limit: i64,
    ) -> ServiceResult<Vec<Reaction>> {
        let own = self
            .ctx
            .reaction_repo()
            .get(
                kind,
                &ReactionConditions::for_user(rctx.user_id)
                    .with_content_id(content_id)
                    .activated(true),
                None,
                &PageFilters::new(1, 0, SortOrder::Desc),
                &CustomFilters::default(),
            )
            .await?;

        if own.is_empty() {
            return Err(DomainError::NotActivated { kind }.into());
        }

        let rows = self
            .ctx
            .reaction_repo()
            .get_by_content_id(kind, content_id, limit)
            .await?;
        Ok(rows)
    }

    /// Like counts for the gateway's items. The one intentionally-absorbed
    /// failure: counts are a display enhancement, so a failed fetch degrades
    /// to zeros with a log instead of failing the page.
    async fn like_counts(&self, kind: ContentKind, batch: &ContentBatch) -> HashMap<Uuid, i64> {
        let item_ids: Vec<Uuid> = batch.items.iter().map(|item| item.id).collect();
        match self
            .ctx
            .reaction_repo()
            .get_counts(
                kind,
                &item_ids,
                &ReactionConditions::default(),
                CountColumn::UserHasLiked,
            )
            .await
        {
            Ok(counts) => counts.into_iter().map(|c| (c.content_id, c.count)).collect(),
            Err(error) => {
                warn!(%error, kind = %kind, "Like count fetch failed; defaulting counts to zero");
                HashMap::new()
            }
        }
    }
}

fn active_conditions(user_id: Uuid, should_hide_mature_content: bool) -> ReactionConditions {
    let conditions = ReactionConditions::for_user(user_id).activated(true);
    if should_hide_mature_content {
        conditions.reported(false)
    } else {
        conditions
    }
}

fn user_point(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPoint> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }
}

fn merge_items(
    items: Vec<pulse_core::ContentItem>,
    reactions: &[Reaction],
    counts: &HashMap<Uuid, i64>,
    user_position: Option<GeoPoint>,
    blocked_users: &[Uuid],
) -> Vec<FeedItem> {
    let reactions_by_id: HashMap<Uuid, &Reaction> =
        reactions.iter().map(|r| (r.content_id, r)).collect();

    items
        .into_iter()
        .filter(|item| !blocked_users.contains(&item.from_user_id))
        .map(|item| {
            let distance = match (user_position, item.latitude, item.longitude) {
                (Some(user), Some(lat), Some(lon)) => {
                    Some(readable_distance(user.distance_meters(&GeoPoint::new(lat, lon))))
                }
                _ => None,
            };

            FeedItem {
                reaction: reactions_by_id.get(&item.id).map(|r| (*r).clone()),
                like_count: counts.get(&item.id).copied().unwrap_or(0),
                distance,
                content: item,
            }
        })
        .collect()
}
