//! Builders wiring the in-memory driven adapters into HTTP state.

use actix_web::web;
use tracing::info;

use imnotupyet::domain::FollowEdge;
use imnotupyet::inbound::http::state::HttpState;
use imnotupyet::outbound::memory::{InMemoryFollowRepository, InMemoryUsernameRegistry};

use super::ServerConfig;

/// Demo graph loaded when `seed_follows` is enabled.
const SEED_FOLLOWS: &[(&str, &str)] = &[
    ("alice", "bob"),
    ("alice", "carol"),
    ("bob", "carol"),
    ("carol", "alice"),
];

fn seed_edges() -> std::io::Result<Vec<FollowEdge>> {
    SEED_FOLLOWS
        .iter()
        .map(|(follower, following)| {
            FollowEdge::try_new(*follower, *following).map_err(|err| {
                std::io::Error::other(format!(
                    "invalid seed edge {follower} -> {following}: {err}"
                ))
            })
        })
        .collect()
}

/// Build the shared HTTP state for the configured server.
///
/// # Errors
/// Returns [`std::io::Error`] if a seed edge fails follow validation.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let follows = if config.seed_follows {
        let edges = seed_edges()?;
        info!(edges = edges.len(), "seeding follow graph");
        InMemoryFollowRepository::with_edges(edges)
    } else {
        InMemoryFollowRepository::new()
    };
    Ok(web::Data::new(HttpState::in_memory(
        follows,
        InMemoryUsernameRegistry::new(),
    )))
}
