//! API responses for the [`auth`](crate::servers::apis::v1::context::auth)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use super::resources::AccessToken;

/// `200` response that contains the [`AccessToken`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `AccessToken` resource to json.
#[must_use]
pub fn access_token_response(access_token: &AccessToken) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(access_token).unwrap(),
    )
        .into_response()
}
