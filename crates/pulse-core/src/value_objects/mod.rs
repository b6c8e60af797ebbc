//! Value objects - immutable domain primitives

mod context;
mod filters;
mod geo;
mod kind;

pub use context::RequestContext;
pub use filters::{
    clamp_limit, CountColumn, CustomFilters, PageFilters, ReactionConditions, SortOrder,
    MAX_PAGE_LIMIT, MAX_RATINGS_LIMIT,
};
pub use geo::{readable_distance, GeoPoint};
pub use kind::{ContentKind, ContentKindParseError};
