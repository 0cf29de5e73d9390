//! Port abstraction for repo persistence adapters and their errors.
//!
//! `find_all` and `find_by_id` report infrastructure failures only; an empty
//! collection or an absent id is a valid outcome, never an error. Deciding
//! what absence means belongs to the service layer.

use async_trait::async_trait;

use crate::domain::{Repo, RepoId};

/// Persistence errors raised by repo repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoRepositoryError {
    /// Repository connection could not be established.
    #[error("repo repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("repo repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl RepoRepositoryError {
    /// Connection failure with the adapter's description.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query failure with the adapter's description.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for read access over the repo collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoRepository: Send + Sync {
    /// Return all records in stored order; an empty vec is a valid outcome.
    async fn find_all(&self) -> Result<Vec<Repo>, RepoRepositoryError>;

    /// Return the record with the given id, or `None` if absent.
    async fn find_by_id(&self, id: RepoId) -> Result<Option<Repo>, RepoRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRepoRepository;

#[async_trait]
impl RepoRepository for FixtureRepoRepository {
    async fn find_all(&self) -> Result<Vec<Repo>, RepoRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: RepoId) -> Result<Option<Repo>, RepoRepositoryError> {
        Ok(None)
    }
}
