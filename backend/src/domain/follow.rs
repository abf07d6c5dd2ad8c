//! Follow-graph edge rules.
//!
//! A follow edge is directed from a follower to the account being followed.
//! The rules here only decide whether an edge is well formed; whether it
//! already exists is answered by [`crate::domain::ports::FollowRepository`].
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. follower identifier is blank
//! 2. following identifier is blank
//! 3. both identifiers are the same string

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationResult;

/// Reasons a proposed follow edge is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FollowValidationError {
    /// Follower identifier is empty or whitespace.
    #[error("Follower ID is required")]
    MissingFollower,
    /// Followed identifier is empty or whitespace.
    #[error("Following ID is required")]
    MissingFollowing,
    /// Follower and followed identifiers are identical.
    #[error("Cannot follow yourself")]
    SelfFollow,
}

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdValidationError {
    /// Identifier is empty once trimmed of whitespace.
    #[error("user id must not be empty")]
    Empty,
}

/// Opaque account identifier.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - Stored exactly as supplied; no trimming or case folding is applied, so
///   equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use imnotupyet::domain::UserId;
    ///
    /// assert!(UserId::new("user-1").is_ok());
    /// assert!(UserId::new("   ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        if is_blank(&id) {
            return Err(UserIdValidationError::Empty);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Directed follow relation between two distinct accounts.
///
/// ## Invariants
/// - `follower != following`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    follower: UserId,
    following: UserId,
}

impl FollowEdge {
    /// Build an edge from raw identifiers, applying the follow rules.
    ///
    /// # Examples
    /// ```
    /// use imnotupyet::domain::{FollowEdge, FollowValidationError};
    ///
    /// let edge = FollowEdge::try_new("alice", "bob").expect("distinct users");
    /// assert_eq!(edge.follower().as_str(), "alice");
    /// assert_eq!(
    ///     FollowEdge::try_new("alice", "alice"),
    ///     Err(FollowValidationError::SelfFollow)
    /// );
    /// ```
    pub fn try_new(
        follower: impl Into<String>,
        following: impl Into<String>,
    ) -> Result<Self, FollowValidationError> {
        let follower = follower.into();
        let following = following.into();
        check_follow(&follower, &following)?;
        Ok(Self {
            follower: UserId(follower),
            following: UserId(following),
        })
    }

    /// Account creating the relation.
    #[must_use]
    pub fn follower(&self) -> &UserId {
        &self.follower
    }

    /// Account being followed.
    #[must_use]
    pub fn following(&self) -> &UserId {
        &self.following
    }

    /// Split the edge into `(follower, following)`.
    #[must_use]
    pub fn into_parts(self) -> (UserId, UserId) {
        (self.follower, self.following)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_follow(follower_id: &str, following_id: &str) -> Result<(), FollowValidationError> {
    if is_blank(follower_id) {
        return Err(FollowValidationError::MissingFollower);
    }
    if is_blank(following_id) {
        return Err(FollowValidationError::MissingFollowing);
    }
    if follower_id == following_id {
        return Err(FollowValidationError::SelfFollow);
    }
    Ok(())
}

/// Decide whether `follower_id` may follow `following_id`.
///
/// # Examples
/// ```
/// use imnotupyet::domain::validate_follow_operation;
///
/// assert!(validate_follow_operation("alice", "bob").is_valid());
/// assert_eq!(
///     validate_follow_operation("", "bob").error(),
///     Some("Follower ID is required")
/// );
/// ```
#[must_use]
pub fn validate_follow_operation(follower_id: &str, following_id: &str) -> ValidationResult {
    check_follow(follower_id, following_id).into()
}

/// Decide whether `follower_id` may unfollow `following_id`.
///
/// Shares the follow preconditions. Whether the edge currently exists is not
/// consulted.
#[must_use]
pub fn validate_unfollow_operation(follower_id: &str, following_id: &str) -> ValidationResult {
    validate_follow_operation(follower_id, following_id)
}
