//! API responses for the [`place`](crate::servers::apis::v1::context::place)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::resources::{ListItem, Place, PlaceDetails};
use crate::core::models;

/// `200` response that contains the [`Place`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `Place` resource to json.
#[must_use]
pub fn place_response(place: &Place) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(place).unwrap(),
    )
        .into_response()
}

/// `201` response that contains the newly created [`Place`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `Place` resource to json.
#[must_use]
pub fn place_created_response(place: &Place) -> Response {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(place).unwrap(),
    )
        .into_response()
}

/// `200` response that contains an array of compact [`ListItem`] resources
/// as json.
#[must_use]
pub fn place_list_response(places: &[models::place::Place]) -> Json<Vec<ListItem>> {
    Json(ListItem::new_vec(places))
}

/// `200` response that contains the [`PlaceDetails`] resource as json, with
/// the owner, the amenities and the reviews embedded.
///
/// # Panics
///
/// Will panic if it can't convert the `PlaceDetails` resource to json.
#[must_use]
pub fn place_details_response(place_details: &PlaceDetails) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(place_details).unwrap(),
    )
        .into_response()
}
