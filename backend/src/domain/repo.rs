//! Repo data model.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

/// Validation errors returned by the repo constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoValidationError {
    NonPositiveId { value: i64 },
    EmptyEmail,
    InvalidEmail,
    TimestampsOutOfOrder,
}

impl fmt::Display for RepoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { value } => {
                write!(f, "repo id must be a positive integer, got {value}")
            }
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::TimestampsOutOfOrder => {
                write!(f, "updatedAt must not precede createdAt")
            }
        }
    }
}

impl std::error::Error for RepoValidationError {}

/// Stable repo identifier.
///
/// ## Invariants
/// - Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(into = "i64")]
pub struct RepoId(i64);

impl RepoId {
    /// Validate and construct a [`RepoId`].
    pub const fn new(value: i64) -> Result<Self, RepoValidationError> {
        if value <= 0 {
            return Err(RepoValidationError::NonPositiveId { value });
        }
        Ok(Self(value))
    }

    /// Access the numeric identifier.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RepoId> for i64 {
    fn from(value: RepoId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for RepoId {
    type Error = RepoValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Contact email address for a repo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, RepoValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, RepoValidationError> {
        if email.trim().is_empty() {
            return Err(RepoValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(RepoValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = RepoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A repo record.
///
/// ## Invariants
/// - `id` is strictly positive and immutable.
/// - `email` satisfies conventional email syntax.
/// - `updated_at >= created_at`.
///
/// Records are created and owned by the repository adapter; the rest of the
/// system only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    #[schema(example = 1)]
    id: RepoId,
    /// Display name shown to clients.
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: EmailAddress,
    #[schema(example = 42)]
    age: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Repo {
    /// Construct a record, rejecting timestamps that run backwards.
    pub fn new(
        id: RepoId,
        name: impl Into<String>,
        email: EmailAddress,
        age: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, RepoValidationError> {
        if updated_at < created_at {
            return Err(RepoValidationError::TimestampsOutOfOrder);
        }
        Ok(Self {
            id,
            name: name.into(),
            email,
            age,
            created_at,
            updated_at,
        })
    }

    /// Stable identifier.
    pub const fn id(&self) -> RepoId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Age in years.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-update timestamp; never precedes [`Repo::created_at`].
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
