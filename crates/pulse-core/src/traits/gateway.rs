//! Content gateway port - the remote content-management subsystem

use async_trait::async_trait;

use crate::entities::{ContentBatch, ContentQuery};
use crate::error::GatewayError;
use crate::value_objects::RequestContext;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Client port for the content-management service.
///
/// The gateway is independently paginated: it may drop ids (deleted
/// content) or return fewer items than requested, and callers must not
/// assume a 1:1 match with the id set they pass in.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Batch-hydrate content records by id, scoped to the requesting user's
    /// identity context (forwarded to the remote service).
    async fn find_by_ids(
        &self,
        ctx: &RequestContext,
        query: ContentQuery,
    ) -> GatewayResult<ContentBatch>;
}
