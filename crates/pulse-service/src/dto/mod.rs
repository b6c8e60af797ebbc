//! Data transfer objects
//!
//! Request DTOs carry `validator` rules; response DTOs serialize camelCase
//! to match the wire contract of the surrounding platform.

pub mod requests;
pub mod responses;

pub use requests::{
    BatchReactionRequest, FeedByIdsRequest, FeedSearchRequest, FindReactionsRequest,
    OwnReactionsQuery, ReactionPatchRequest,
};
pub use responses::{
    FeedItem, FeedPage, Pagination, RatingSummary, ReconcileOutcome, UserDataDeletion,
};
