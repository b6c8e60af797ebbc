//! # pulse-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ContentBatch, ContentItem, ContentQuery, NewReaction, Reaction, ReactionCount, ReactionPatch,
};
pub use error::{DomainError, GatewayError};
pub use traits::{ContentGateway, GatewayResult, ReactionRepository, RepoResult};
pub use value_objects::{
    clamp_limit, readable_distance, ContentKind, ContentKindParseError, CountColumn, CustomFilters,
    GeoPoint, PageFilters, ReactionConditions, RequestContext, SortOrder, MAX_PAGE_LIMIT,
    MAX_RATINGS_LIMIT,
};
