//! Account handle rules.
//!
//! Uniqueness is not checked here; that needs the
//! [`crate::domain::ports::UsernameRegistry`] port.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationResult;

/// Minimum allowed username length in characters.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed username length in characters.
pub const USERNAME_MAX: usize = 20;

/// Handles that can never be claimed, compared case-insensitively.
pub const RESERVED_USERNAMES: [&str; 5] = ["admin", "support", "coffee", "root", "system"];

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        let pattern = format!("^[a-z0-9_]{{{USERNAME_MIN},{USERNAME_MAX}}}$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsernameValidationError {
    /// Candidate is the empty string.
    #[error("Username is required")]
    Empty,
    /// Candidate is shorter than `min` or longer than `max` characters.
    #[error("Username must be between {min} and {max} characters")]
    InvalidLength { min: usize, max: usize },
    /// Candidate uses characters outside `[a-z0-9_]` or has an underscore at
    /// either end.
    #[error(
        "Username can only contain lowercase letters, numbers, and underscores, and cannot start or end with an underscore"
    )]
    InvalidCharacters,
    /// Candidate is on the reserved list.
    #[error("This username is reserved")]
    Reserved,
}

fn check_username(candidate: &str) -> Result<(), UsernameValidationError> {
    if candidate.is_empty() {
        return Err(UsernameValidationError::Empty);
    }

    let length = candidate.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return Err(UsernameValidationError::InvalidLength {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
        });
    }

    if !username_regex().is_match(candidate) || candidate.starts_with('_') || candidate.ends_with('_')
    {
        return Err(UsernameValidationError::InvalidCharacters);
    }

    let folded = candidate.to_lowercase();
    if RESERVED_USERNAMES.contains(&folded.as_str()) {
        return Err(UsernameValidationError::Reserved);
    }

    Ok(())
}

/// Decide whether `candidate` is an acceptable username.
///
/// # Examples
/// ```
/// use imnotupyet::domain::validate_username;
///
/// assert!(validate_username("valid_name1").is_valid());
/// assert_eq!(
///     validate_username("ab").error(),
///     Some("Username must be between 3 and 20 characters")
/// );
/// ```
#[must_use]
pub fn validate_username(candidate: &str) -> ValidationResult {
    check_username(candidate).into()
}

/// Username that satisfies every rule in this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(candidate: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let candidate = candidate.into();
        check_username(&candidate)?;
        Ok(Self(candidate))
    }

    /// Borrow the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
