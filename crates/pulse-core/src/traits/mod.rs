//! Ports - traits the infrastructure layers implement

mod gateway;
mod repositories;

pub use gateway::{ContentGateway, GatewayResult};
pub use repositories::{ReactionRepository, RepoResult};
