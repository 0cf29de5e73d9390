//! Shared validation helpers for inbound HTTP adapters.
//!
//! Pure functions coercing raw transport strings into domain values before
//! any business logic runs. A failure names the offending field so handlers
//! can report it without reaching the service layer.

use crate::domain::RepoId;

/// Field path of the id path parameter.
const ID_FIELD: &str = "params.id";

/// Structured validation failure naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidationFailure {
    field: &'static str,
    message: &'static str,
}

impl ValidationFailure {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Path of the field that failed validation.
    pub(crate) const fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable reason suitable for the response envelope.
    pub(crate) const fn message(&self) -> &'static str {
        self.message
    }
}

/// Coerce a raw path segment into a [`RepoId`].
pub(crate) fn parse_repo_id(raw: &str) -> Result<RepoId, ValidationFailure> {
    let Ok(value) = raw.parse::<i64>() else {
        return Err(ValidationFailure::new(ID_FIELD, "ID must be a numeric value"));
    };
    RepoId::new(value)
        .map_err(|_| ValidationFailure::new(ID_FIELD, "ID must be a positive number"))
}
