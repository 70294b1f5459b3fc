//! Server construction and wiring of real adapters.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use backend::domain::{CommentService, HeroQueryService};
use backend::inbound::http;
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    self, SurrealCommentRepository, SurrealHeroRepository,
};

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .configure(http::configure)
        .service(ready)
        .service(live)
}

/// Connect the document store, wire the services, and spawn the HTTP server.
///
/// Readiness flips only after the store connection and schema bootstrap have
/// both succeeded, so the readiness probe tracks actual serving capability.
///
/// # Errors
/// Returns [`std::io::Error`] when the store is unreachable, its schema
/// cannot be applied, or the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let db = persistence::connect(config.store())
        .await
        .map_err(std::io::Error::other)?;
    persistence::init_schema(&db)
        .await
        .map_err(std::io::Error::other)?;

    let heroes = Arc::new(SurrealHeroRepository::new(db.clone()));
    let comments = Arc::new(SurrealCommentRepository::new(db));
    let http_state = web::Data::new(HttpState::new(
        Arc::new(HeroQueryService::new(heroes.clone())),
        Arc::new(CommentService::new(heroes, comments)),
    ));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
