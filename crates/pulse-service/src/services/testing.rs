//! In-memory trait doubles for service-layer tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use pulse_core::{
    clamp_limit, ContentBatch, ContentGateway, ContentItem, ContentKind, ContentQuery,
    CountColumn, CustomFilters, DomainError, GatewayError, GatewayResult, NewReaction,
    PageFilters, Reaction, ReactionConditions, ReactionCount, ReactionPatch, ReactionRepository,
    RepoResult, RequestContext, SortOrder, MAX_PAGE_LIMIT, MAX_RATINGS_LIMIT,
};

type Key = (ContentKind, Uuid, Uuid);

/// In-memory reaction store honoring the same semantics as the SQL
/// implementation: clamps, ordering, the counts short-circuit, and
/// conflict-as-update inserts.
#[derive(Default)]
pub(crate) struct InMemoryReactionRepository {
    rows: Mutex<HashMap<Key, Reaction>>,
    seq: AtomicI64,
    /// Counts calls that actually reached "storage" (past the empty check)
    pub counts_calls: AtomicUsize,
    /// When set, count fetches fail after the empty check
    pub fail_counts: AtomicBool,
}

impl InMemoryReactionRepository {
    fn next_timestamp(&self) -> DateTime<Utc> {
        let tick = self.seq.fetch_add(1, Ordering::SeqCst);
        // A fixed base keeps ordering deterministic across the whole test
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(tick)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn matches(row: &Reaction, conditions: &ReactionConditions) -> bool {
        conditions.user_id.is_none_or(|v| row.user_id == v)
            && conditions.content_id.is_none_or(|v| row.content_id == v)
            && conditions
                .user_has_activated
                .is_none_or(|v| row.user_has_activated == v)
            && conditions
                .user_has_reported
                .is_none_or(|v| row.user_has_reported == v)
    }

    fn apply_patch(row: &mut Reaction, patch: &ReactionPatch, now: DateTime<Utc>) {
        if let Some(v) = patch.user_view_count {
            row.user_view_count = v;
        }
        if let Some(v) = patch.user_has_activated {
            row.user_has_activated = v;
        }
        if let Some(v) = patch.user_has_liked {
            row.user_has_liked = v;
        }
        if let Some(v) = patch.user_has_super_liked {
            row.user_has_super_liked = v;
        }
        if let Some(v) = patch.user_has_disliked {
            row.user_has_disliked = v;
        }
        if let Some(v) = patch.user_has_super_disliked {
            row.user_has_super_disliked = v;
        }
        if let Some(v) = patch.user_has_reported {
            row.user_has_reported = v;
        }
        if let Some(v) = &patch.user_bookmark_category {
            row.user_bookmark_category.clone_from(v);
        }
        if let Some(v) = patch.rating {
            row.rating = Some(v);
        }
        row.update_count += 1;
        row.updated_at = now;
    }

    fn materialize(row: &NewReaction, created_at: DateTime<Utc>) -> Reaction {
        Reaction {
            content_id: row.content_id,
            user_id: row.user_id,
            user_view_count: row.user_view_count,
            user_has_activated: row.user_has_activated,
            user_has_liked: row.user_has_liked,
            user_has_super_liked: row.user_has_super_liked,
            user_has_disliked: row.user_has_disliked,
            user_has_super_disliked: row.user_has_super_disliked,
            user_has_reported: row.user_has_reported,
            user_bookmark_category: row.user_bookmark_category.clone(),
            rating: row.rating,
            user_locale: row.user_locale.clone(),
            update_count: 0,
            created_at,
            updated_at: created_at,
        }
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn get(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        content_ids: Option<&[Uuid]>,
        page: &PageFilters,
        customs: &CustomFilters,
    ) -> RepoResult<Vec<Reaction>> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<Reaction> = rows
            .iter()
            .filter(|((k, _, _), _)| *k == kind)
            .map(|(_, row)| row)
            .filter(|row| Self::matches(row, conditions))
            .filter(|row| !customs.with_bookmark || row.user_bookmark_category.is_some())
            .filter(|row| content_ids.is_none_or(|ids| ids.contains(&row.content_id)))
            .cloned()
            .collect();

        matched.sort_by_key(|r| r.created_at);
        if page.order == SortOrder::Desc {
            matched.reverse();
        }

        Ok(matched
            .into_iter()
            .skip(usize::try_from(page.offset.max(0)).unwrap_or(0))
            .take(usize::try_from(page.effective_limit()).unwrap_or(0))
            .collect())
    }

    async fn get_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<Reaction>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|((k, _, c), _)| *k == kind && *c == content_id)
            .map(|(_, row)| row.clone())
            .take(usize::try_from(clamp_limit(limit, MAX_PAGE_LIMIT)).unwrap_or(0))
            .collect())
    }

    async fn get_ratings_by_content_id(
        &self,
        kind: ContentKind,
        content_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<f64>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|((k, _, c), _)| *k == kind && *c == content_id)
            .filter_map(|(_, row)| row.rating)
            .take(usize::try_from(clamp_limit(limit, MAX_RATINGS_LIMIT)).unwrap_or(0))
            .collect())
    }

    async fn get_counts(
        &self,
        kind: ContentKind,
        content_ids: &[Uuid],
        conditions: &ReactionConditions,
        count_by: CountColumn,
    ) -> RepoResult<Vec<ReactionCount>> {
        if content_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.counts_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("counts query failed".to_string()));
        }

        let rows = self.rows.lock().unwrap();
        let mut by_content: HashMap<Uuid, i64> = HashMap::new();
        for ((k, _, c), row) in rows.iter() {
            if *k != kind || !content_ids.contains(c) || !Self::matches(row, conditions) {
                continue;
            }
            let flagged = match count_by {
                CountColumn::UserHasLiked => row.user_has_liked,
                CountColumn::UserHasSuperLiked => row.user_has_super_liked,
                CountColumn::UserHasDisliked => row.user_has_disliked,
                CountColumn::UserHasSuperDisliked => row.user_has_super_disliked,
                CountColumn::UserHasActivated => row.user_has_activated,
                CountColumn::UserHasReported => row.user_has_reported,
            };
            if flagged {
                *by_content.entry(*c).or_default() += 1;
            }
        }

        Ok(by_content
            .into_iter()
            .map(|(content_id, count)| ReactionCount { content_id, count })
            .collect())
    }

    async fn create_many(
        &self,
        kind: ContentKind,
        new_rows: &[NewReaction],
    ) -> RepoResult<Vec<Reaction>> {
        let mut result = Vec::with_capacity(new_rows.len());
        for new_row in new_rows {
            let now = self.next_timestamp();
            let key = (kind, new_row.user_id, new_row.content_id);
            let mut rows = self.rows.lock().unwrap();
            let stored = match rows.get_mut(&key) {
                // Conflict-as-update: view counts accumulate
                Some(existing) => {
                    existing.user_view_count += new_row.user_view_count;
                    existing.user_has_activated = new_row.user_has_activated;
                    existing.user_has_liked = new_row.user_has_liked;
                    existing.user_has_super_liked = new_row.user_has_super_liked;
                    existing.user_has_disliked = new_row.user_has_disliked;
                    existing.user_has_super_disliked = new_row.user_has_super_disliked;
                    existing.user_has_reported = new_row.user_has_reported;
                    existing
                        .user_bookmark_category
                        .clone_from(&new_row.user_bookmark_category);
                    existing.rating = new_row.rating;
                    existing.user_locale.clone_from(&new_row.user_locale);
                    existing.update_count += 1;
                    existing.updated_at = now;
                    existing.clone()
                }
                None => {
                    let row = Self::materialize(new_row, now);
                    rows.insert(key, row.clone());
                    row
                }
            };
            result.push(stored);
        }
        Ok(result)
    }

    async fn update(
        &self,
        kind: ContentKind,
        conditions: &ReactionConditions,
        patch: &ReactionPatch,
        where_in: Option<&[(Uuid, Uuid)]>,
    ) -> RepoResult<Vec<Reaction>> {
        if where_in.is_some_and(<[(Uuid, Uuid)]>::is_empty) {
            return Ok(Vec::new());
        }
        let now = self.next_timestamp();
        let mut rows = self.rows.lock().unwrap();
        let mut updated = Vec::new();
        for ((k, user_id, content_id), row) in rows.iter_mut() {
            if *k != kind || !Self::matches(row, conditions) {
                continue;
            }
            if where_in.is_some_and(|pairs| !pairs.contains(&(*user_id, *content_id))) {
                continue;
            }
            Self::apply_patch(row, patch, now);
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn delete_by_user(&self, kind: ContentKind, user_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(k, u, _), _| !(*k == kind && *u == user_id));
        Ok((before - rows.len()) as u64)
    }
}

/// Stub content gateway returning a configured batch or a single queued error
#[derive(Default)]
pub(crate) struct StubContentGateway {
    pub items: Mutex<Vec<ContentItem>>,
    pub media: Mutex<Map<String, Value>>,
    pub fail_with: Mutex<Option<GatewayError>>,
    pub calls: AtomicUsize,
    pub last_query: Mutex<Option<ContentQuery>>,
}

impl StubContentGateway {
    pub fn with_items(items: Vec<ContentItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn failing(err: GatewayError) -> Self {
        Self {
            fail_with: Mutex::new(Some(err)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ContentGateway for StubContentGateway {
    async fn find_by_ids(
        &self,
        _ctx: &RequestContext,
        query: ContentQuery,
    ) -> GatewayResult<ContentBatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_with.lock().unwrap().take() {
            *self.last_query.lock().unwrap() = Some(query);
            return Err(err);
        }

        // Like the real service: only the requested ids come back, and
        // anything it no longer knows about is silently dropped
        let items: Vec<ContentItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| query.content_ids.contains(&item.id))
            .take(usize::try_from(query.limit.max(0)).unwrap_or(0))
            .cloned()
            .collect();
        let media = self.media.lock().unwrap().clone();
        *self.last_query.lock().unwrap() = Some(query);

        Ok(ContentBatch { items, media })
    }
}

/// Build a service context over fresh in-memory dependencies
pub(crate) fn test_context(
    gateway: StubContentGateway,
) -> (super::context::ServiceContext, Arc<InMemoryReactionRepository>) {
    let repo = Arc::new(InMemoryReactionRepository::default());
    let ctx = super::context::ServiceContext::new(repo.clone(), Arc::new(gateway));
    (ctx, repo)
}

/// A minimal content item for feed tests
pub(crate) fn content_item(
    id: Uuid,
    from_user_id: Uuid,
    coordinates: Option<(f64, f64)>,
) -> ContentItem {
    ContentItem {
        id,
        from_user_id,
        latitude: coordinates.map(|(lat, _)| lat),
        longitude: coordinates.map(|(_, lon)| lon),
        is_draft: false,
        extra: Map::new(),
    }
}
