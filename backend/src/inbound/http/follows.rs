//! Follow graph API handlers.
//!
//! ```text
//! POST /api/v1/follows {"followerId":"alice","followingId":"bob"}
//! DELETE /api/v1/follows {"followerId":"alice","followingId":"bob"}
//! GET /api/v1/users/{userId}/following
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::FollowOutcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Body for follow and unfollow requests, echoed back on success.
///
/// Missing fields decode as empty strings so the edge rules report them.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub follower_id: String,
    #[serde(default)]
    #[schema(example = "bob")]
    pub following_id: String,
}

/// Accounts followed by a user.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowingResponse {
    pub user_id: String,
    pub following: Vec<String>,
}

/// Follow another account.
///
/// Answers 201 when a new edge is stored and 200 when it already existed.
#[utoipa::path(
    post,
    path = "/api/v1/follows",
    request_body = FollowRequest,
    responses(
        (status = 201, description = "Now following", body = FollowRequest),
        (status = 200, description = "Already following", body = FollowRequest),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Social graph unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "follow"
)]
#[post("/follows")]
pub async fn follow(
    state: web::Data<HttpState>,
    payload: web::Json<FollowRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let outcome = state
        .social_graph
        .follow(&request.follower_id, &request.following_id)
        .await?;
    let mut response = match outcome {
        FollowOutcome::Created => HttpResponse::Created(),
        FollowOutcome::AlreadyFollowing => HttpResponse::Ok(),
    };
    Ok(response.json(request))
}

/// Stop following an account.
///
/// Answers 204 whether or not the edge existed.
#[utoipa::path(
    delete,
    path = "/api/v1/follows",
    request_body = FollowRequest,
    responses(
        (status = 204, description = "Not following"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Social graph unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "unfollow"
)]
#[delete("/follows")]
pub async fn unfollow(
    state: web::Data<HttpState>,
    payload: web::Json<FollowRequest>,
) -> ApiResult<HttpResponse> {
    state
        .social_graph
        .unfollow(&payload.follower_id, &payload.following_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List accounts a user follows, in ascending identifier order.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/following",
    params(("user_id" = String, Path, description = "Follower identifier")),
    responses(
        (status = 200, description = "Followed accounts", body = FollowingResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "listFollowing"
)]
#[get("/users/{user_id}/following")]
pub async fn list_following(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FollowingResponse>> {
    let user_id = path.into_inner();
    let following = state.social_graph.following(&user_id).await?;
    Ok(web::Json(FollowingResponse {
        user_id,
        following: following.into_iter().map(String::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockSocialGraph, MockUsernameClaims};
    use crate::domain::{Error, UnfollowOutcome, UserId};
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app(
        graph: MockSocialGraph,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(Arc::new(graph), Arc::new(MockUsernameClaims::new()));
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(follow)
                .service(unfollow)
                .service(list_following),
        )
    }

    fn edge_body() -> Value {
        json!({"followerId": "alice", "followingId": "bob"})
    }

    #[rstest]
    #[case(FollowOutcome::Created, StatusCode::CREATED)]
    #[case(FollowOutcome::AlreadyFollowing, StatusCode::OK)]
    #[actix_web::test]
    async fn follow_status_reflects_outcome(
        #[case] outcome: FollowOutcome,
        #[case] expected: StatusCode,
    ) {
        let mut graph = MockSocialGraph::new();
        graph
            .expect_follow()
            .withf(|follower, following| follower == "alice" && following == "bob")
            .times(1)
            .return_once(move |_, _| Ok(outcome));
        let app = actix_test::init_service(test_app(graph)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/follows")
            .set_json(edge_body())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, edge_body());
    }

    #[rstest]
    #[actix_web::test]
    async fn follow_surfaces_domain_errors() {
        let mut graph = MockSocialGraph::new();
        graph
            .expect_follow()
            .return_once(|_, _| Err(Error::invalid_request("Cannot follow yourself")));
        let app = actix_test::init_service(test_app(graph)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/follows")
            .set_json(json!({"followerId": "alice", "followingId": "alice"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Cannot follow yourself")
        );
    }

    #[rstest]
    #[case(UnfollowOutcome::Removed)]
    #[case(UnfollowOutcome::NotFollowing)]
    #[actix_web::test]
    async fn unfollow_is_no_content(#[case] outcome: UnfollowOutcome) {
        let mut graph = MockSocialGraph::new();
        graph
            .expect_unfollow()
            .times(1)
            .return_once(move |_, _| Ok(outcome));
        let app = actix_test::init_service(test_app(graph)).await;

        let request = actix_test::TestRequest::delete()
            .uri("/api/v1/follows")
            .set_json(edge_body())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_following_returns_camel_case_json() {
        let mut graph = MockSocialGraph::new();
        graph
            .expect_following()
            .withf(|user| user == "alice")
            .return_once(|_| {
                Ok(vec![
                    UserId::new("bob").expect("fixture id"),
                    UserId::new("carol").expect("fixture id"),
                ])
            });
        let app = actix_test::init_service(test_app(graph)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users/alice/following")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"userId": "alice", "following": ["bob", "carol"]}));
    }
}
