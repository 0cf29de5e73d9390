//! Response envelope shared by every endpoint.
//!
//! The envelope is transport agnostic. Inbound adapters map
//! [`ResponseStatus`] to an HTTP status code and serialize the body; the
//! status kind itself never appears on the wire.

use serde::Serialize;
use utoipa::ToSchema;

/// Status kind carried by an envelope.
///
/// [`ResponseStatus::Ok`] is only produced by [`ServiceResponse::success`];
/// the failure constructors cover the remaining kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// The request succeeded and the payload is present.
    Ok,
    /// The request was malformed or failed validation.
    BadRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred while serving the request.
    InternalError,
}

/// Uniform success/failure envelope.
///
/// ## Invariants
/// - `response_object` is present iff `success` is true.
/// - A success envelope always carries [`ResponseStatus::Ok`]; a failure
///   envelope never does.
/// - Constructed once per request and never mutated afterwards.
///
/// Wire shape: `{"success": bool, "message": string, "responseObject": T | null}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "Repos found")]
    message: String,
    response_object: Option<T>,
    #[serde(skip)]
    status: ResponseStatus,
}

impl<T> ServiceResponse<T> {
    /// Success envelope wrapping a payload.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: Some(payload),
            status: ResponseStatus::Ok,
        }
    }

    /// Failure envelope for malformed client input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(message, ResponseStatus::BadRequest)
    }

    /// Failure envelope for a resource that does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(message, ResponseStatus::NotFound)
    }

    /// Failure envelope for an unexpected internal error.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::failure(message, ResponseStatus::InternalError)
    }

    fn failure(message: impl Into<String>, status: ResponseStatus) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status,
        }
    }

    /// Whether this envelope wraps a payload.
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable outcome description.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Wrapped payload; present iff [`ServiceResponse::is_success`].
    pub const fn response_object(&self) -> Option<&T> {
        self.response_object.as_ref()
    }

    /// Status kind mapped to the transport status by inbound adapters.
    pub const fn status(&self) -> ResponseStatus {
        self.status
    }
}
