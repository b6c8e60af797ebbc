//! Domain entities

mod content;
mod reaction;

pub use content::{ContentBatch, ContentItem, ContentQuery};
pub use reaction::{NewReaction, Reaction, ReactionCount, ReactionPatch};
