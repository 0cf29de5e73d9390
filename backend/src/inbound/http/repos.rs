//! Repo API handlers.
//!
//! ```text
//! GET /repos
//! GET /repos/{id}
//! ```
//!
//! Handlers validate raw input before the service port is invoked and emit
//! exactly one enveloped response per request.

use actix_web::{get, web};
use tracing::debug;

use crate::domain::{Repo, ServiceResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation;

/// List all repos.
#[utoipa::path(
    get,
    path = "/repos",
    responses(
        (status = 200, description = "Repos found", body = ServiceResponse<Vec<Repo>>),
        (status = 404, description = "Collection is empty", body = ServiceResponse<Vec<Repo>>),
        (status = 500, description = "Internal server error", body = ServiceResponse<Vec<Repo>>)
    ),
    tags = ["repos"],
    operation_id = "listRepos"
)]
#[get("/repos")]
pub async fn list_repos(state: web::Data<HttpState>) -> ServiceResponse<Vec<Repo>> {
    state.repos.find_all().await
}

/// Fetch a single repo by identifier.
///
/// The raw path segment is validated first; on failure the service port is
/// never reached and the handler answers with a bad-request envelope.
#[utoipa::path(
    get,
    path = "/repos/{id}",
    params(
        ("id" = String, Path, description = "Repo identifier; must parse as a positive integer")
    ),
    responses(
        (status = 200, description = "Repo found", body = ServiceResponse<Repo>),
        (status = 400, description = "Identifier failed validation", body = ServiceResponse<Repo>),
        (status = 404, description = "Repo not found", body = ServiceResponse<Repo>),
        (status = 500, description = "Internal server error", body = ServiceResponse<Repo>)
    ),
    tags = ["repos"],
    operation_id = "getRepo"
)]
#[get("/repos/{id}")]
pub async fn get_repo(
    state: web::Data<HttpState>,
    raw_id: web::Path<String>,
) -> ServiceResponse<Repo> {
    match validation::parse_repo_id(&raw_id) {
        Ok(id) => state.repos.find_by_id(id).await,
        Err(failure) => {
            debug!(field = failure.field(), value = %*raw_id, "rejected repo id");
            ServiceResponse::bad_request(format!("Invalid input: {}", failure.message()))
        }
    }
}
