//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{SocialGraph, UsernameClaims};
use crate::domain::{SocialGraphService, UsernameClaimService};
use crate::outbound::memory::{InMemoryFollowRepository, InMemoryUsernameRegistry};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub social_graph: Arc<dyn SocialGraph>,
    pub usernames: Arc<dyn UsernameClaims>,
}

impl HttpState {
    /// Construct state from driving port implementations.
    pub fn new(social_graph: Arc<dyn SocialGraph>, usernames: Arc<dyn UsernameClaims>) -> Self {
        Self {
            social_graph,
            usernames,
        }
    }

    /// Wire the domain services over the given in-memory adapters.
    ///
    /// # Examples
    /// ```
    /// use imnotupyet::inbound::http::state::HttpState;
    /// use imnotupyet::outbound::memory::{InMemoryFollowRepository, InMemoryUsernameRegistry};
    ///
    /// let state = HttpState::in_memory(
    ///     InMemoryFollowRepository::new(),
    ///     InMemoryUsernameRegistry::new(),
    /// );
    /// let _graph = state.social_graph.clone();
    /// ```
    pub fn in_memory(follows: InMemoryFollowRepository, usernames: InMemoryUsernameRegistry) -> Self {
        Self::new(
            Arc::new(SocialGraphService::new(Arc::new(follows))),
            Arc::new(UsernameClaimService::new(Arc::new(usernames))),
        )
    }
}
