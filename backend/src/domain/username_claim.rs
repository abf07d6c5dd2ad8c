//! Username claim service.
//!
//! Runs the syntactic username rules, then asks the
//! [`UsernameRegistry`] to bind the handle to the account.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::ports::{Reservation, UsernameClaims, UsernameRegistry, UsernameRegistryError};
use crate::domain::{Error, UserId, Username, UsernameValidationError};

/// Account and the handle it now owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameClaim {
    /// Account that made the claim.
    pub user_id: UserId,
    /// Handle bound to the account.
    pub username: Username,
}

/// Stable detail code for a username rule violation.
fn username_error_code(err: UsernameValidationError) -> &'static str {
    match err {
        UsernameValidationError::Empty => "empty_username",
        UsernameValidationError::InvalidLength { .. } => "invalid_length",
        UsernameValidationError::InvalidCharacters => "invalid_characters",
        UsernameValidationError::Reserved => "reserved_username",
    }
}

fn username_validation_error(err: UsernameValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": "username",
        "code": username_error_code(err),
    }))
}

fn map_registry_error(err: &UsernameRegistryError) -> Error {
    error!(error = %err, "username registry failure");
    match err {
        UsernameRegistryError::Connection { .. } => {
            Error::service_unavailable("username registry is temporarily unavailable")
        }
        UsernameRegistryError::Query { .. } => Error::internal(err.to_string()),
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| {
        Error::invalid_request("User ID is required")
            .with_details(json!({ "field": "userId", "code": "missing_user_id" }))
    })
}

/// Username claims backed by a [`UsernameRegistry`].
#[derive(Clone)]
pub struct UsernameClaimService {
    registry: Arc<dyn UsernameRegistry>,
}

impl UsernameClaimService {
    /// Create a service over `registry`.
    pub fn new(registry: Arc<dyn UsernameRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl UsernameClaims for UsernameClaimService {
    async fn claim(&self, user_id: &str, candidate: &str) -> Result<UsernameClaim, Error> {
        let user_id = parse_user_id(user_id)?;
        let username = Username::new(candidate).map_err(|err| {
            debug!(user_id = %user_id, reason = %err, "username rejected");
            username_validation_error(err)
        })?;

        match self
            .registry
            .reserve(&user_id, &username)
            .await
            .map_err(|err| map_registry_error(&err))?
        {
            Reservation::Granted => {
                info!(user_id = %user_id, username = %username, "username claimed");
                Ok(UsernameClaim { user_id, username })
            }
            Reservation::Taken { .. } => Err(Error::conflict("Username is already taken")
                .with_details(json!({ "field": "username", "code": "username_taken" }))),
        }
    }

    async fn username_of(&self, user_id: &str) -> Result<Username, Error> {
        let user_id = parse_user_id(user_id)?;
        self.registry
            .username_of(&user_id)
            .await
            .map_err(|err| map_registry_error(&err))?
            .ok_or_else(|| Error::not_found(format!("user {user_id} has no username")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUsernameRegistry;
    use rstest::rstest;

    fn service(registry: MockUsernameRegistry) -> UsernameClaimService {
        UsernameClaimService::new(Arc::new(registry))
    }

    #[rstest]
    #[tokio::test]
    async fn granted_reservation_returns_claim() {
        let mut registry = MockUsernameRegistry::new();
        registry
            .expect_reserve()
            .withf(|user, name| user.as_str() == "user-1" && name.as_str() == "flat_white")
            .times(1)
            .return_once(|_, _| Ok(Reservation::Granted));

        let claim = service(registry)
            .claim("user-1", "flat_white")
            .await
            .expect("claim succeeds");
        assert_eq!(claim.user_id.as_str(), "user-1");
        assert_eq!(claim.username.as_str(), "flat_white");
    }

    #[rstest]
    #[tokio::test]
    async fn taken_reservation_is_a_conflict() {
        let mut registry = MockUsernameRegistry::new();
        registry.expect_reserve().return_once(|_, _| {
            Ok(Reservation::Taken {
                owner: UserId::new("user-2").expect("fixture owner"),
            })
        });

        let err = service(registry)
            .claim("user-1", "flat_white")
            .await
            .expect_err("name is taken");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Username is already taken");
    }

    #[rstest]
    #[case("", "Username is required", "empty_username")]
    #[case("ab", "Username must be between 3 and 20 characters", "invalid_length")]
    #[case("_latte", "Username can only contain lowercase letters, numbers, and underscores, and cannot start or end with an underscore", "invalid_characters")]
    #[case("support", "This username is reserved", "reserved_username")]
    #[tokio::test]
    async fn invalid_usernames_never_reach_registry(
        #[case] candidate: &str,
        #[case] message: &str,
        #[case] code: &str,
    ) {
        let mut registry = MockUsernameRegistry::new();
        registry.expect_reserve().never();

        let err = service(registry)
            .claim("user-1", candidate)
            .await
            .expect_err("validation fails");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), message);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "username", "code": code }))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn blank_user_id_is_rejected() {
        let mut registry = MockUsernameRegistry::new();
        registry.expect_reserve().never();

        let err = service(registry)
            .claim(" ", "flat_white")
            .await
            .expect_err("blank user");
        assert_eq!(err.message(), "User ID is required");
    }

    #[rstest]
    #[tokio::test]
    async fn username_of_reports_missing_handle() {
        let mut registry = MockUsernameRegistry::new();
        registry
            .expect_username_of()
            .withf(|user| user.as_str() == "user-1")
            .return_once(|_| Ok(None));

        let err = service(registry)
            .username_of("user-1")
            .await
            .expect_err("no handle yet");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn username_of_returns_current_handle() {
        let mut registry = MockUsernameRegistry::new();
        registry
            .expect_username_of()
            .return_once(|_| Ok(Some(Username::new("cortado").expect("fixture name"))));

        let username = service(registry)
            .username_of("user-1")
            .await
            .expect("handle present");
        assert_eq!(username.as_str(), "cortado");
    }

    #[rstest]
    #[tokio::test]
    async fn registry_connection_failure_is_unavailable() {
        let mut registry = MockUsernameRegistry::new();
        registry
            .expect_reserve()
            .return_once(|_, _| Err(UsernameRegistryError::connection("refused")));

        let err = service(registry)
            .claim("user-1", "flat_white")
            .await
            .expect_err("registry down");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
