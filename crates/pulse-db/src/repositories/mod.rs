//! Repository implementations
//!
//! PostgreSQL implementation of the reaction storage port defined in
//! pulse-core. A single repository serves all four content kinds; the kind
//! selects the table.

mod error;
mod reaction;

pub use reaction::PgReactionRepository;
