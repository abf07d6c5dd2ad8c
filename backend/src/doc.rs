//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`ValidationResultSchema`]) plus the request and response bodies
//!
//! Swagger UI serves the document in debug builds.

use crate::inbound::http::follows::{FollowRequest, FollowingResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ValidationResultSchema};
use crate::inbound::http::usernames::{ClaimUsernameRequest, UsernameResponse};
use crate::inbound::http::validation::{FollowCheckRequest, UsernameCheckRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "imnotupyet backend API",
        description = "Account identifier validation, follow graph and username claims."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::validation::check_username,
        crate::inbound::http::validation::check_follow,
        crate::inbound::http::validation::check_unfollow,
        crate::inbound::http::follows::follow,
        crate::inbound::http::follows::unfollow,
        crate::inbound::http::follows::list_following,
        crate::inbound::http::usernames::claim_username,
        crate::inbound::http::usernames::get_username,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ValidationResultSchema,
        UsernameCheckRequest,
        FollowCheckRequest,
        FollowRequest,
        FollowingResponse,
        ClaimUsernameRequest,
        UsernameResponse
    )),
    tags(
        (name = "validation", description = "Dry-run checks for usernames and follow edges"),
        (name = "follows", description = "Follow graph mutations and queries"),
        (name = "usernames", description = "Username claims"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
