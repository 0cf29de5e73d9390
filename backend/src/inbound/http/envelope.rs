//! HTTP adapter mapping for response envelopes.
//!
//! Purpose: keep the envelope HTTP-agnostic while letting Actix handlers
//! return it directly. The envelope's status kind becomes the transport
//! status code; the body is the envelope serialized as JSON.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::domain::{ResponseStatus, ServiceResponse};

/// Transport status code for an envelope status kind.
pub(crate) const fn status_for(status: ResponseStatus) -> StatusCode {
    match status {
        ResponseStatus::Ok => StatusCode::OK,
        ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
        ResponseStatus::NotFound => StatusCode::NOT_FOUND,
        ResponseStatus::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T: Serialize> Responder for ServiceResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(status_for(self.status())).json(self)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ResponseStatus::Ok, StatusCode::OK)]
    #[case(ResponseStatus::BadRequest, StatusCode::BAD_REQUEST)]
    #[case(ResponseStatus::NotFound, StatusCode::NOT_FOUND)]
    #[case(ResponseStatus::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_every_status_kind(#[case] status: ResponseStatus, #[case] expected: StatusCode) {
        assert_eq!(status_for(status), expected);
    }
}
