//! Service context - dependency container for services
//!
//! Holds the reaction store and the content gateway behind their ports so
//! services (and tests) never depend on concrete implementations.

use std::sync::Arc;

use pulse_core::{ContentGateway, ReactionRepository};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services. It
/// provides access to:
/// - The reaction repository (PostgreSQL in production)
/// - The content gateway (HTTP client to the content-management service)
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    content_gateway: Arc<dyn ContentGateway>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        content_gateway: Arc<dyn ContentGateway>,
    ) -> Self {
        Self {
            reaction_repo,
            content_gateway,
        }
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the content gateway
    pub fn content_gateway(&self) -> &dyn ContentGateway {
        self.content_gateway.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("reaction_repo", &"dyn ReactionRepository")
            .field("content_gateway", &"dyn ContentGateway")
            .finish()
    }
}
