//! Port for username ownership.
//!
//! The registry answers the uniqueness question that syntactic validation in
//! [`crate::domain::username`] cannot.

use async_trait::async_trait;

use crate::domain::{UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by username registry adapters.
    pub enum UsernameRegistryError {
        /// Registry connection could not be established.
        Connection { message: String } => "username registry connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "username registry query failed: {message}",
    }
}

/// Result of asking the registry to bind a username to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservation {
    /// The username now belongs to the requesting account. Any previous
    /// username held by that account has been released.
    Granted,
    /// Another account already holds the username.
    Taken {
        /// Current owner.
        owner: UserId,
    },
}

/// Ownership port for account handles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsernameRegistry: Send + Sync {
    /// Bind `username` to `user_id`, releasing the account's previous handle.
    ///
    /// Re-reserving a handle the account already owns is `Granted`.
    async fn reserve(
        &self,
        user_id: &UserId,
        username: &Username,
    ) -> Result<Reservation, UsernameRegistryError>;

    /// Handle currently held by `user_id`.
    async fn username_of(&self, user_id: &UserId)
    -> Result<Option<Username>, UsernameRegistryError>;
}
