//! Social graph service: follow, unfollow and list-following use cases.
//!
//! Every mutation builds a [`FollowEdge`] first, so the repository never sees
//! a blank identifier or a self-follow. Follow and unfollow are idempotent;
//! repeating either reports the existing state instead of failing.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{FollowPersistenceError, FollowRepository, SocialGraph};
use crate::domain::{Error, FollowEdge, FollowValidationError, UserId};

/// Result of a follow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    /// A new edge was stored.
    Created,
    /// The edge already existed.
    AlreadyFollowing,
}

/// Result of an unfollow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    /// The edge was removed.
    Removed,
    /// There was no edge to remove.
    NotFollowing,
}

/// Map a follow rule violation to an `invalid_request` error with field
/// details.
pub(crate) fn follow_validation_error(err: FollowValidationError) -> Error {
    let (field, code) = match err {
        FollowValidationError::MissingFollower => ("followerId", "missing_follower"),
        FollowValidationError::MissingFollowing => ("followingId", "missing_following"),
        FollowValidationError::SelfFollow => ("followingId", "self_follow"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_persistence_error(err: &FollowPersistenceError) -> Error {
    error!(error = %err, "follow repository failure");
    match err {
        FollowPersistenceError::Connection { .. } => {
            Error::service_unavailable("social graph is temporarily unavailable")
        }
        FollowPersistenceError::Query { .. } => Error::internal(err.to_string()),
    }
}

/// Social graph use cases backed by a [`FollowRepository`].
#[derive(Clone)]
pub struct SocialGraphService {
    repository: Arc<dyn FollowRepository>,
}

impl SocialGraphService {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<dyn FollowRepository>) -> Self {
        Self { repository }
    }

    fn edge(follower_id: &str, following_id: &str) -> Result<FollowEdge, Error> {
        FollowEdge::try_new(follower_id, following_id).map_err(|err| {
            debug!(follower = follower_id, following = following_id, reason = %err, "follow edge rejected");
            follow_validation_error(err)
        })
    }
}

#[async_trait]
impl SocialGraph for SocialGraphService {
    async fn follow(&self, follower_id: &str, following_id: &str) -> Result<FollowOutcome, Error> {
        let edge = Self::edge(follower_id, following_id)?;
        let inserted = self
            .repository
            .insert(&edge)
            .await
            .map_err(|err| map_persistence_error(&err))?;
        Ok(if inserted {
            FollowOutcome::Created
        } else {
            FollowOutcome::AlreadyFollowing
        })
    }

    async fn unfollow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<UnfollowOutcome, Error> {
        let edge = Self::edge(follower_id, following_id)?;
        let removed = self
            .repository
            .remove(&edge)
            .await
            .map_err(|err| map_persistence_error(&err))?;
        Ok(if removed {
            UnfollowOutcome::Removed
        } else {
            UnfollowOutcome::NotFollowing
        })
    }

    async fn following(&self, user_id: &str) -> Result<Vec<UserId>, Error> {
        let user_id = UserId::new(user_id)
            .map_err(|_| follow_validation_error(FollowValidationError::MissingFollower))?;
        self.repository
            .following(&user_id)
            .await
            .map_err(|err| map_persistence_error(&err))
    }
}
