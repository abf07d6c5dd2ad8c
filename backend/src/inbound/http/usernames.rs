//! Username claim API handlers.
//!
//! ```text
//! PUT /api/v1/users/{userId}/username {"username":"flat_white"}
//! GET /api/v1/users/{userId}/username
//! ```

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::UsernameClaim;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `PUT /api/v1/users/{userId}/username`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimUsernameRequest {
    #[serde(default)]
    #[schema(example = "flat_white")]
    pub username: String,
}

/// Account and its current handle.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsernameResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: String,
    #[schema(example = "flat_white")]
    pub username: String,
}

impl From<UsernameClaim> for UsernameResponse {
    fn from(claim: UsernameClaim) -> Self {
        Self {
            user_id: claim.user_id.into(),
            username: claim.username.into(),
        }
    }
}

/// Claim or change a user's handle.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/username",
    params(("user_id" = String, Path, description = "Account identifier")),
    request_body = ClaimUsernameRequest,
    responses(
        (status = 200, description = "Username claimed", body = UsernameResponse),
        (status = 400, description = "Username rejected", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 503, description = "Registry unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["usernames"],
    operation_id = "claimUsername"
)]
#[put("/users/{user_id}/username")]
pub async fn claim_username(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ClaimUsernameRequest>,
) -> ApiResult<web::Json<UsernameResponse>> {
    let claim = state
        .usernames
        .claim(&path.into_inner(), &payload.username)
        .await?;
    Ok(web::Json(claim.into()))
}

/// Fetch a user's current handle.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/username",
    params(("user_id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Current username", body = UsernameResponse),
        (status = 404, description = "No username claimed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["usernames"],
    operation_id = "getUsername"
)]
#[get("/users/{user_id}/username")]
pub async fn get_username(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UsernameResponse>> {
    let user_id = path.into_inner();
    let username = state.usernames.username_of(&user_id).await?;
    Ok(web::Json(UsernameResponse {
        user_id,
        username: username.into(),
    }))
}
