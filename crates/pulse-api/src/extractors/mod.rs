//! Axum extractors for request handling
//!
//! Custom extractors for identity headers, validation, and path parsing.

mod identity;
mod path;
mod validated;

pub use identity::Identity;
pub use path::parse_collection;
pub use validated::ValidatedJson;
