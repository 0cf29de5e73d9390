//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the repo read endpoints and the health probes
//! - **Schemas**: the [`Repo`] record and the concrete envelope shapes
//!
//! The generated specification is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Repo, ServiceResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repodex backend API",
        description = "Read-only HTTP interface over the repo directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::repos::list_repos,
        crate::inbound::http::repos::get_repo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Repo, ServiceResponse<Repo>, ServiceResponse<Vec<Repo>>)),
    tags(
        (name = "repos", description = "Operations related to repos"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
