//! API responses for the [`user`](crate::servers::apis::v1::context::user)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::resources::User;
use crate::core::models;

/// `200` response that contains the [`User`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `User` resource to json.
#[must_use]
pub fn user_response(user: &User) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(user).unwrap(),
    )
        .into_response()
}

/// `201` response that contains the newly created [`User`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `User` resource to json.
#[must_use]
pub fn user_created_response(user: &User) -> Response {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(user).unwrap(),
    )
        .into_response()
}

/// `200` response that contains an array of [`User`] resources as json.
#[must_use]
pub fn user_list_response(users: &[models::user::User]) -> Json<Vec<User>> {
    Json(User::new_vec(users))
}
