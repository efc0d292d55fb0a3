//! Common responses for the API v1 shared by all the contexts.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::error::Error;

/// The body shared by all the API error responses.
///
/// ```json
/// {
///   "error": "Place not found"
/// }
/// ```
#[derive(Serialize, Debug)]
pub struct ErrorBody<'a> {
    pub error: std::borrow::Cow<'a, str>,
}

/// It maps a domain error to the response the API returns for it.
///
/// Status code | Errors
/// ---|---
/// `404` | entity not found
/// `401` | invalid credentials
/// `400` | validation errors and business rule violations
/// `500` | database and token infrastructure failures
#[must_use]
pub fn error_response(error: &Error) -> Response {
    match error {
        Error::UserNotFound | Error::PlaceNotFound | Error::ReviewNotFound | Error::AmenityNotFound => {
            not_found_response(&error.to_string())
        }
        Error::InvalidCredentials => unauthorized_response(&error.to_string()),
        Error::EmailAlreadyRegistered
        | Error::EmailAlreadyInUse
        | Error::AmenityNameAlreadyExists
        | Error::OwnerNotFound
        | Error::ReferencedAmenityNotFound { .. }
        | Error::CannotReviewOwnPlace
        | Error::PlaceAlreadyReviewed
        | Error::Validation(_) => bad_request_response(&error.to_string()),
        Error::Database { .. } | Error::Token { .. } => unhandled_rejection_response(error.to_string()),
    }
}

#[must_use]
pub fn bad_request_response(reason: &str) -> Response {
    json_error_response(StatusCode::BAD_REQUEST, reason)
}

#[must_use]
pub fn unauthorized_response(reason: &str) -> Response {
    json_error_response(StatusCode::UNAUTHORIZED, reason)
}

#[must_use]
pub fn forbidden_response(reason: &str) -> Response {
    json_error_response(StatusCode::FORBIDDEN, reason)
}

#[must_use]
pub fn not_found_response(reason: &str) -> Response {
    json_error_response(StatusCode::NOT_FOUND, reason)
}

/// `500` error response for failures the API does not map to a more specific
/// status code, like losing the database connection.
#[must_use]
pub fn unhandled_rejection_response(reason: String) -> Response {
    json_error_response(StatusCode::INTERNAL_SERVER_ERROR, &format!("Unhandled rejection: {reason}"))
}

/// # Panics
///
/// Will panic if it can't convert the error body to json.
fn json_error_response(status: StatusCode, reason: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(&ErrorBody { error: reason.into() }).unwrap(),
    )
        .into_response()
}
