//! Shared Actix application for HTTP integration tests.

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    test, web,
};
use imnotupyet::Trace;
use imnotupyet::domain::FollowEdge;
use imnotupyet::inbound::http::error::json_error_handler;
use imnotupyet::inbound::http::follows::{follow, list_following, unfollow};
use imnotupyet::inbound::http::state::HttpState;
use imnotupyet::inbound::http::usernames::{claim_username, get_username};
use imnotupyet::inbound::http::validation::{check_follow, check_unfollow, check_username};
use imnotupyet::outbound::memory::{InMemoryFollowRepository, InMemoryUsernameRegistry};

/// Build the full `/api/v1` surface over fresh in-memory adapters seeded with
/// `edges`.
pub async fn init_app(
    edges: &[(&str, &str)],
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let edges = edges
        .iter()
        .map(|(follower, following)| FollowEdge::try_new(*follower, *following))
        .collect::<Result<Vec<_>, _>>()
        .expect("fixture edges are valid");
    let state = HttpState::in_memory(
        InMemoryFollowRepository::with_edges(edges),
        InMemoryUsernameRegistry::new(),
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(check_username)
                    .service(check_follow)
                    .service(check_unfollow)
                    .service(follow)
                    .service(unfollow)
                    .service(list_following)
                    .service(claim_username)
                    .service(get_username),
            ),
    )
    .await
}
