//! Database models
//!
//! SQLx row models for the four per-kind reaction tables. All tables share
//! one schema, so one model covers them all.

mod reaction;

pub use reaction::{ReactionCountModel, ReactionModel};
