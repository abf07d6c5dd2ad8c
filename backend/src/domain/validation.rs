//! Uniform outcome returned by the pure validators.
//!
//! Both [`crate::domain::validate_username`] and
//! [`crate::domain::validate_follow_operation`] report through
//! [`ValidationResult`] so callers can surface the reason string verbatim.
//!
//! Serialisation contract:
//! - `Valid` is `{"isValid": true}`.
//! - `Invalid` is `{"isValid": false, "error": "<reason>"}`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single validation call.
///
/// # Examples
/// ```
/// use imnotupyet::domain::ValidationResult;
///
/// let result = ValidationResult::invalid("Username is required");
/// assert!(!result.is_valid());
/// assert_eq!(result.error(), Some("Username is required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValidationResultDto", into = "ValidationResultDto")]
pub enum ValidationResult {
    /// Input satisfies every rule.
    Valid,
    /// Input failed the first rule listed in `error`.
    Invalid {
        /// Human-readable reason for the failure.
        error: String,
    },
}

impl ValidationResult {
    /// Build an invalid outcome carrying `error`.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::Invalid {
            error: error.into(),
        }
    }

    /// Whether the input passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Reason for rejection, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { error } => Some(error.as_str()),
        }
    }
}

impl<E: fmt::Display> From<Result<(), E>> for ValidationResult {
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => Self::Valid,
            Err(err) => Self::invalid(err.to_string()),
        }
    }
}

/// Errors raised when decoding an inconsistent wire payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationResultDecodeError {
    /// `isValid` was true but an error reason was present.
    #[error("valid results must not carry an error")]
    UnexpectedError,
    /// `isValid` was false but no reason was supplied.
    #[error("invalid results must carry an error")]
    MissingError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResultDto {
    is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ValidationResult> for ValidationResultDto {
    fn from(value: ValidationResult) -> Self {
        match value {
            ValidationResult::Valid => Self {
                is_valid: true,
                error: None,
            },
            ValidationResult::Invalid { error } => Self {
                is_valid: false,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ValidationResultDto> for ValidationResult {
    type Error = ValidationResultDecodeError;

    fn try_from(value: ValidationResultDto) -> Result<Self, Self::Error> {
        match (value.is_valid, value.error) {
            (true, None) => Ok(Self::Valid),
            (true, Some(_)) => Err(ValidationResultDecodeError::UnexpectedError),
            (false, Some(error)) => Ok(Self::Invalid { error }),
            (false, None) => Err(ValidationResultDecodeError::MissingError),
        }
    }
}
