//! Rating service

use tracing::instrument;
use uuid::Uuid;

use pulse_core::{ContentKind, MAX_RATINGS_LIMIT};

use crate::dto::RatingSummary;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Average rating for one content item.
    ///
    /// The average rounds half-up to one decimal; with no ratings on record
    /// it is null rather than zero, so clients can tell "unrated" from
    /// "rated terribly".
    #[instrument(skip(self))]
    pub async fn summarize(&self, kind: ContentKind, content_id: Uuid) -> ServiceResult<RatingSummary> {
        let ratings = self
            .ctx
            .reaction_repo()
            .get_ratings_by_content_id(kind, content_id, MAX_RATINGS_LIMIT)
            .await?;

        Ok(RatingSummary {
            avg_rating: average(&ratings),
            total_ratings: ratings.len() as i64,
        })
    }
}

fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: f64 = ratings.iter().sum();
    Some((sum / ratings.len() as f64 * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, StubContentGateway};
    use pulse_core::{NewReaction, ReactionRepository};

    async fn seed_rating(
        repo: &dyn ReactionRepository,
        content_id: Uuid,
        rating: Option<f64>,
    ) {
        let mut row = NewReaction::new(content_id, Uuid::new_v4(), "en-us");
        row.rating = rating;
        repo.create_many(ContentKind::Place, &[row]).await.unwrap();
    }

    #[tokio::test]
    async fn test_average_rounds_to_one_decimal() {
        let (ctx, repo) = test_context(StubContentGateway::default());
        let content_id = Uuid::new_v4();
        for r in [5.0, 4.0, 3.0, 4.0, 4.0] {
            seed_rating(repo.as_ref(), content_id, Some(r)).await;
        }

        let summary = RatingService::new(&ctx)
            .summarize(ContentKind::Place, content_id)
            .await
            .unwrap();
        assert_eq!(summary.avg_rating, Some(4.0));
        assert_eq!(summary.total_ratings, 5);
    }

    #[tokio::test]
    async fn test_average_rounds_half_up() {
        let (ctx, repo) = test_context(StubContentGateway::default());
        let content_id = Uuid::new_v4();
        // 13 / 3 = 4.333..., one decimal: 4.3
        for r in [5.0, 4.0, 4.0] {
            seed_rating(repo.as_ref(), content_id, Some(r)).await;
        }

        let summary = RatingService::new(&ctx)
            .summarize(ContentKind::Place, content_id)
            .await
            .unwrap();
        assert_eq!(summary.avg_rating, Some(4.3));
    }

    #[tokio::test]
    async fn test_unrated_content_reports_null_average() {
        let (ctx, repo) = test_context(StubContentGateway::default());
        let content_id = Uuid::new_v4();
        // A reaction without a rating contributes nothing
        seed_rating(repo.as_ref(), content_id, None).await;

        let summary = RatingService::new(&ctx)
            .summarize(ContentKind::Place, content_id)
            .await
            .unwrap();
        assert_eq!(summary.avg_rating, None);
        assert_eq!(summary.total_ratings, 0);
    }
}
