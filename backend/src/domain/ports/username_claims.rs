//! Driving port for claiming account handles.

use async_trait::async_trait;

use crate::domain::{Error, Username, UsernameClaim};

/// Domain use-case port for username claims.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsernameClaims: Send + Sync {
    /// Bind `candidate` to `user_id` if it is valid and free.
    async fn claim(&self, user_id: &str, candidate: &str) -> Result<UsernameClaim, Error>;

    /// Handle currently held by `user_id`; `not_found` when there is none.
    async fn username_of(&self, user_id: &str) -> Result<Username, Error>;
}
