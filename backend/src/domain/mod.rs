//! Domain primitives and services.
//!
//! Purpose: define the strongly typed repo entity, the response envelope
//! shared by every endpoint, and the query service that maps repository
//! outcomes to envelopes. Types here are transport agnostic; the inbound
//! adapter maps envelope statuses to HTTP status codes.

pub mod ports;
pub mod repo;
pub mod repo_service;
pub mod response;

pub use self::repo::{EmailAddress, Repo, RepoId, RepoValidationError};
pub use self::repo_service::RepoService;
pub use self::response::{ResponseStatus, ServiceResponse};
