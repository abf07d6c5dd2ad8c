//! Driving port for follow and unfollow use cases.
//!
//! HTTP handlers depend on this trait rather than on the repository so they
//! stay testable with a mock.

use async_trait::async_trait;

use crate::domain::{Error, FollowOutcome, UnfollowOutcome, UserId};

/// Domain use-case port for social graph mutations and reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraph: Send + Sync {
    /// Make `follower_id` follow `following_id`.
    async fn follow(&self, follower_id: &str, following_id: &str) -> Result<FollowOutcome, Error>;

    /// Remove the edge from `follower_id` to `following_id`.
    async fn unfollow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<UnfollowOutcome, Error>;

    /// Accounts followed by `user_id`, in ascending identifier order.
    async fn following(&self, user_id: &str) -> Result<Vec<UserId>, Error>;
}
