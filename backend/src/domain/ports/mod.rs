//! Domain ports for the hexagonal boundary.

mod repo_query;
mod repo_repository;

#[cfg(test)]
pub use repo_query::MockRepoQuery;
pub use repo_query::RepoQuery;
#[cfg(test)]
pub use repo_repository::MockRepoRepository;
pub use repo_repository::{FixtureRepoRepository, RepoRepository, RepoRepositoryError};
