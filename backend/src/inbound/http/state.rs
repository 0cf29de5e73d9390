//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O. The
//! bundle is built once at process start and injected; there is no implicit
//! global default.

use std::sync::Arc;

use crate::domain::ports::RepoQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Repo read use-cases.
    pub repos: Arc<dyn RepoQuery>,
}

impl HttpState {
    /// Construct state from the repo query port.
    pub fn new(repos: Arc<dyn RepoQuery>) -> Self {
        Self { repos }
    }
}
