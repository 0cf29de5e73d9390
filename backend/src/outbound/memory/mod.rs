//! In-memory repo repository adapter.
//!
//! The production data source for this service: a fixed, ordered collection
//! captured at construction and shared read-only across workers. Reads never
//! fail; the port's error variants exist for adapters with a real backing
//! store and for test doubles.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{RepoRepository, RepoRepositoryError};
use crate::domain::{EmailAddress, Repo, RepoId};

/// Read-only repository over a fixed record collection.
#[derive(Debug, Clone)]
pub struct InMemoryRepoRepository {
    records: Vec<Repo>,
}

impl InMemoryRepoRepository {
    /// Wrap an arbitrary collection, preserving its order.
    pub fn new(records: Vec<Repo>) -> Self {
        Self { records }
    }

    /// Build the demo collection served by default.
    pub fn seeded() -> Self {
        Self::new(vec![
            seed_repo(1, "Alice", "alice@example.com", 42),
            seed_repo(2, "Bob", "bob@example.com", 21),
        ])
    }

    /// Records in stored order.
    pub fn records(&self) -> &[Repo] {
        &self.records
    }
}

fn seed_repo(id: i64, name: &str, email: &str, age: u32) -> Repo {
    let now = Utc::now();
    let id = RepoId::new(id).unwrap_or_else(|err| panic!("seed repo id invalid: {err}"));
    let email =
        EmailAddress::new(email).unwrap_or_else(|err| panic!("seed repo email invalid: {err}"));
    Repo::new(id, name, email, age, now, now)
        .unwrap_or_else(|err| panic!("seed repo record invalid: {err}"))
}

#[async_trait]
impl RepoRepository for InMemoryRepoRepository {
    async fn find_all(&self) -> Result<Vec<Repo>, RepoRepositoryError> {
        Ok(self.records.clone())
    }

    async fn find_by_id(&self, id: RepoId) -> Result<Option<Repo>, RepoRepositoryError> {
        Ok(self.records.iter().find(|repo| repo.id() == id).cloned())
    }
}
