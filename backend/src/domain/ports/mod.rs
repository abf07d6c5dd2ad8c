//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`SocialGraph`], [`UsernameClaims`]) are what inbound
//! adapters call. Driven ports ([`FollowRepository`], [`UsernameRegistry`])
//! are what the domain calls. Each driven port exposes strongly typed errors
//! so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod follow_repository;
mod social_graph;
mod username_claims;
mod username_registry;

#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FollowPersistenceError, FollowRepository};
#[cfg(test)]
pub use social_graph::MockSocialGraph;
pub use social_graph::SocialGraph;
#[cfg(test)]
pub use username_claims::MockUsernameClaims;
pub use username_claims::UsernameClaims;
#[cfg(test)]
pub use username_registry::MockUsernameRegistry;
pub use username_registry::{Reservation, UsernameRegistry, UsernameRegistryError};
