//! Repo query service.
//!
//! Translates repository outcomes into response envelopes. This boundary is
//! the only place the error taxonomy is enforced: absence becomes a
//! not-found envelope, infrastructure failures are logged here and surfaced
//! as an internal-error envelope whose message carries no internal detail.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{RepoQuery, RepoRepository};
use crate::domain::{Repo, RepoId, ServiceResponse};

/// Service implementing the [`RepoQuery`] driving port.
#[derive(Clone)]
pub struct RepoService<R> {
    repos: Arc<R>,
}

impl<R> RepoService<R> {
    /// Create a new service with the injected repository.
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R> RepoQuery for RepoService<R>
where
    R: RepoRepository,
{
    async fn find_all(&self) -> ServiceResponse<Vec<Repo>> {
        match self.repos.find_all().await {
            Ok(repos) if repos.is_empty() => ServiceResponse::not_found("No Repos found"),
            Ok(repos) => ServiceResponse::success("Repos found", repos),
            Err(err) => {
                error!(error = %err, "failed to retrieve repos");
                ServiceResponse::internal_error("An error occurred while retrieving repos.")
            }
        }
    }

    async fn find_by_id(&self, id: RepoId) -> ServiceResponse<Repo> {
        match self.repos.find_by_id(id).await {
            Ok(Some(repo)) => ServiceResponse::success("Repo found", repo),
            Ok(None) => ServiceResponse::not_found("Repo not found"),
            Err(err) => {
                error!(error = %err, repo_id = %id, "failed to find repo");
                ServiceResponse::internal_error("An error occurred while finding repo.")
            }
        }
    }
}

#[cfg(test)]
#[path = "repo_service_tests.rs"]
mod tests;
