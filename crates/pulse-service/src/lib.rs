//! # pulse-service
//!
//! Application layer containing the reconciliation, feed-aggregation, and
//! rating-summary use cases, plus DTOs and the service dependency container.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, FeedService, RatingService, ReconcileService, ServiceContext, ServiceError,
    ServiceResult,
};
