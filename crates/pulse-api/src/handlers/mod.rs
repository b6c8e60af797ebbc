//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod feeds;
pub mod health;
pub mod ratings;
pub mod reactions;
pub mod users;
