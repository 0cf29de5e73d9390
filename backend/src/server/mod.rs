//! Server construction and wiring.
//!
//! Dependencies are built exactly once here and injected into the HTTP
//! adapter through [`HttpState`]; handlers hold no implicit globals.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::RepoService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::repos::{get_repo, list_repos};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryRepoRepository;

/// Wire the seeded repository and the repo service into handler state.
#[must_use]
pub fn build_state() -> HttpState {
    let repository = Arc::new(InMemoryRepoRepository::seeded());
    HttpState::new(Arc::new(RepoService::new(repository)))
}

/// Compose the application served by every worker.
pub fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .service(list_repos)
        .service(get_repo)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server and mark the health state ready.
///
/// # Errors
/// Returns [`std::io::Error`] when the listener cannot bind.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let state = build_state();
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    Ok(server.run())
}
