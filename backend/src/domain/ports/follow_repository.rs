//! Port for storing follow edges.
//!
//! Adapters own existence checks; the domain only hands them edges that
//! already passed [`crate::domain::FollowEdge::try_new`].

use async_trait::async_trait;

use crate::domain::{FollowEdge, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow repository adapters.
    pub enum FollowPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "follow repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "follow repository query failed: {message}",
    }
}

/// Persistence port for the social graph.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Store `edge`. Returns `false` when it was already present.
    async fn insert(&self, edge: &FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Delete `edge`. Returns `false` when it was not present.
    async fn remove(&self, edge: &FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Accounts followed by `follower`, in ascending identifier order.
    async fn following(&self, follower: &UserId) -> Result<Vec<UserId>, FollowPersistenceError>;
}
