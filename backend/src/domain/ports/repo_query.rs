//! Driving port for repo read use-cases.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch repo data without
//! importing persistence concerns. Production backs it with
//! [`crate::domain::RepoService`]; tests use a mock.

use async_trait::async_trait;

use crate::domain::{Repo, RepoId, ServiceResponse};

/// Domain use-case port for listing and fetching repos.
///
/// Every outcome — including absence and infrastructure failure — is already
/// folded into the returned envelope, so callers never branch on errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoQuery: Send + Sync {
    /// Return the full collection wrapped in an envelope.
    async fn find_all(&self) -> ServiceResponse<Vec<Repo>>;

    /// Return the record with the given id wrapped in an envelope.
    async fn find_by_id(&self, id: RepoId) -> ServiceResponse<Repo>;
}
