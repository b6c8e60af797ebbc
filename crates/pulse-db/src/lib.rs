//! # pulse-db
//!
//! Database layer implementing the reaction storage port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation for the repository trait
//! defined in `pulse-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation backing all four content kinds
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_db::pool::{create_pool, DatabaseConfig};
//! use pulse_db::PgReactionRepository;
//! use pulse_core::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgReactionRepository;
