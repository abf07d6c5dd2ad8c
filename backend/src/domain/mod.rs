//! Domain primitives, rules and services.
//!
//! Purpose: hold the account-identifier and social-graph rules plus the use
//! cases that apply them before touching a driven port. Nothing here depends
//! on actix-web.
//!
//! Public surface:
//! - [`validate_follow_operation`], [`validate_unfollow_operation`] and
//!   [`validate_username`]: pure validators returning [`ValidationResult`].
//! - [`UserId`], [`FollowEdge`], [`Username`]: typed values built from the
//!   same rules.
//! - [`SocialGraphService`], [`UsernameClaimService`]: use cases behind the
//!   driving ports in [`ports`].
//! - [`Error`], [`ErrorCode`]: transport-agnostic failure payload.

pub mod error;
pub mod follow;
pub mod ports;
pub mod social_graph;
pub mod trace_id;
pub mod username;
pub mod username_claim;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::follow::{
    FollowEdge, FollowValidationError, UserId, UserIdValidationError, validate_follow_operation,
    validate_unfollow_operation,
};
pub use self::social_graph::{FollowOutcome, SocialGraphService, UnfollowOutcome};
pub use self::trace_id::TraceId;
pub use self::username::{
    RESERVED_USERNAMES, USERNAME_MAX, USERNAME_MIN, Username, UsernameValidationError,
    validate_username,
};
pub use self::username_claim::{UsernameClaim, UsernameClaimService};
pub use self::validation::ValidationResult;
