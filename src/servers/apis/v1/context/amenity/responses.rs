//! API responses for the [`amenity`](crate::servers::apis::v1::context::amenity)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::resources::Amenity;
use crate::core::models;

/// `200` response that contains the [`Amenity`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `Amenity` resource to json.
#[must_use]
pub fn amenity_response(amenity: &Amenity) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(amenity).unwrap(),
    )
        .into_response()
}

/// `201` response that contains the newly created [`Amenity`] resource as
/// json.
///
/// # Panics
///
/// Will panic if it can't convert the `Amenity` resource to json.
#[must_use]
pub fn amenity_created_response(amenity: &Amenity) -> Response {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(amenity).unwrap(),
    )
        .into_response()
}

/// `200` response that contains an array of [`Amenity`] resources as json.
#[must_use]
pub fn amenity_list_response(amenities: &[models::amenity::Amenity]) -> Json<Vec<Amenity>> {
    Json(Amenity::new_vec(amenities))
}
