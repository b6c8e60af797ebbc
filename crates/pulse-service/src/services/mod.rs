//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! reconciliation, feed aggregation, rating summaries, and account cleanup.

pub mod account;
pub mod context;
pub mod error;
pub mod feed;
pub mod rating;
pub mod reconcile;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use account::AccountService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use rating::RatingService;
pub use reconcile::ReconcileService;
