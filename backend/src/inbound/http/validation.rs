//! Validation API handlers.
//!
//! ```text
//! POST /api/v1/validation/username {"username":"flat_white"}
//! POST /api/v1/validation/follow {"followerId":"alice","followingId":"bob"}
//! POST /api/v1/validation/unfollow {"followerId":"alice","followingId":"bob"}
//! ```
//!
//! These endpoints always answer 200; rejection is reported inside the
//! `ValidationResult` body. Missing fields are treated as empty strings so the
//! validators' own "required" messages apply.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    ValidationResult, validate_follow_operation, validate_unfollow_operation, validate_username,
};
use crate::inbound::http::schemas::{ErrorSchema, ValidationResultSchema};

/// Request body for `POST /api/v1/validation/username`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsernameCheckRequest {
    #[serde(default)]
    pub username: String,
}

/// Request body for the follow and unfollow checks.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowCheckRequest {
    #[serde(default)]
    pub follower_id: String,
    #[serde(default)]
    pub following_id: String,
}

/// Check a candidate username without claiming it.
#[utoipa::path(
    post,
    path = "/api/v1/validation/username",
    request_body = UsernameCheckRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidationResultSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["validation"],
    operation_id = "validateUsername"
)]
#[post("/validation/username")]
pub async fn check_username(payload: web::Json<UsernameCheckRequest>) -> web::Json<ValidationResult> {
    web::Json(validate_username(&payload.username))
}

/// Check whether a follow edge would be accepted.
#[utoipa::path(
    post,
    path = "/api/v1/validation/follow",
    request_body = FollowCheckRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidationResultSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["validation"],
    operation_id = "validateFollow"
)]
#[post("/validation/follow")]
pub async fn check_follow(payload: web::Json<FollowCheckRequest>) -> web::Json<ValidationResult> {
    web::Json(validate_follow_operation(
        &payload.follower_id,
        &payload.following_id,
    ))
}

/// Check whether an unfollow request would be accepted.
#[utoipa::path(
    post,
    path = "/api/v1/validation/unfollow",
    request_body = FollowCheckRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidationResultSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["validation"],
    operation_id = "validateUnfollow"
)]
#[post("/validation/unfollow")]
pub async fn check_unfollow(payload: web::Json<FollowCheckRequest>) -> web::Json<ValidationResult> {
    web::Json(validate_unfollow_operation(
        &payload.follower_id,
        &payload.following_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn post_json(uri: &str, body: Value) -> Value {
        let app = actix_test::init_service(
            App::new().service(
                web::scope("/api/v1")
                    .service(check_username)
                    .service(check_follow)
                    .service(check_unfollow),
            ),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        actix_test::read_body_json(response).await
    }

    #[rstest]
    #[case(json!({"username": "valid_name1"}), json!({"isValid": true}))]
    #[case(json!({"username": "ab"}), json!({"isValid": false, "error": "Username must be between 3 and 20 characters"}))]
    #[case(json!({"username": "system"}), json!({"isValid": false, "error": "This username is reserved"}))]
    #[case(json!({}), json!({"isValid": false, "error": "Username is required"}))]
    #[actix_web::test]
    async fn username_check_reports_outcome(#[case] body: Value, #[case] expected: Value) {
        assert_eq!(post_json("/api/v1/validation/username", body).await, expected);
    }

    #[rstest]
    #[case("/api/v1/validation/follow")]
    #[case("/api/v1/validation/unfollow")]
    #[actix_web::test]
    async fn edge_checks_report_outcome(#[case] uri: &str) {
        let valid = post_json(uri, json!({"followerId": "alice", "followingId": "bob"})).await;
        assert_eq!(valid, json!({"isValid": true}));

        let self_edge = post_json(uri, json!({"followerId": "alice", "followingId": "alice"})).await;
        assert_eq!(
            self_edge,
            json!({"isValid": false, "error": "Cannot follow yourself"})
        );

        let missing = post_json(uri, json!({"followingId": "bob"})).await;
        assert_eq!(
            missing,
            json!({"isValid": false, "error": "Follower ID is required"})
        );
    }
}
