//! Tests for the repo query service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use super::*;
use crate::domain::ports::{MockRepoRepository, RepoRepositoryError};
use crate::domain::{EmailAddress, ResponseStatus};

fn sample_repo(id: i64, name: &str, email: &str, age: u32) -> Repo {
    let now = Utc::now();
    Repo::new(
        RepoId::new(id).expect("positive id"),
        name,
        EmailAddress::new(email).expect("valid email"),
        age,
        now,
        now,
    )
    .expect("valid record")
}

fn sample_repos() -> Vec<Repo> {
    vec![
        sample_repo(1, "Alice", "alice@example.com", 42),
        sample_repo(2, "Bob", "bob@example.com", 21),
    ]
}

#[tokio::test]
async fn find_all_wraps_records_in_success_envelope() {
    let repos = sample_repos();
    let expected = repos.clone();

    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_all()
        .times(1)
        .return_once(move || Ok(repos));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_all().await;

    assert!(envelope.is_success());
    assert_eq!(envelope.message(), "Repos found");
    assert_eq!(envelope.status(), ResponseStatus::Ok);
    assert_eq!(envelope.response_object(), Some(&expected));
}

#[tokio::test]
async fn find_all_maps_empty_collection_to_not_found() {
    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_all()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_all().await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message(), "No Repos found");
    assert_eq!(envelope.status(), ResponseStatus::NotFound);
    assert!(envelope.response_object().is_none());
}

#[tokio::test]
async fn find_all_maps_repository_error_to_internal_error() {
    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_all()
        .times(1)
        .return_once(|| Err(RepoRepositoryError::query("backing store unreachable")));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_all().await;

    assert!(!envelope.is_success());
    assert_eq!(
        envelope.message(),
        "An error occurred while retrieving repos."
    );
    assert_eq!(envelope.status(), ResponseStatus::InternalError);
    assert!(envelope.response_object().is_none());
}

#[tokio::test]
async fn find_by_id_wraps_present_record_in_success_envelope() {
    let repo = sample_repo(1, "Alice", "alice@example.com", 42);
    let expected = repo.clone();
    let id = repo.id();

    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(id))
        .times(1)
        .return_once(move |_| Ok(Some(repo)));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_by_id(id).await;

    assert!(envelope.is_success());
    assert_eq!(envelope.message(), "Repo found");
    assert_eq!(envelope.response_object(), Some(&expected));
}

#[tokio::test]
async fn find_by_id_maps_absence_to_not_found() {
    let id = RepoId::new(404).expect("positive id");

    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(id))
        .times(1)
        .return_once(|_| Ok(None));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_by_id(id).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message(), "Repo not found");
    assert_eq!(envelope.status(), ResponseStatus::NotFound);
    assert!(envelope.response_object().is_none());
}

#[tokio::test]
async fn find_by_id_maps_repository_error_to_internal_error() {
    let id = RepoId::new(1).expect("positive id");

    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(RepoRepositoryError::connection("refused")));

    let service = RepoService::new(Arc::new(repository));
    let envelope = service.find_by_id(id).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message(), "An error occurred while finding repo.");
    assert_eq!(envelope.status(), ResponseStatus::InternalError);
    assert!(envelope.response_object().is_none());
}

#[tokio::test]
async fn repeated_find_by_id_yields_identical_envelopes() {
    let repo = sample_repo(1, "Alice", "alice@example.com", 42);
    let id = repo.id();

    let mut repository = MockRepoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(id))
        .times(2)
        .returning(move |_| Ok(Some(repo.clone())));

    let service = RepoService::new(Arc::new(repository));
    let first = service.find_by_id(id).await;
    let second = service.find_by_id(id).await;

    assert_eq!(first, second);
}
