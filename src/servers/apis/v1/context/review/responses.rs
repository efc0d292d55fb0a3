//! API responses for the [`review`](crate::servers::apis::v1::context::review)
//! API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use super::resources::Review;
use crate::core::models;

/// `200` response that contains the [`Review`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `Review` resource to json.
#[must_use]
pub fn review_response(review: &Review) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(review).unwrap(),
    )
        .into_response()
}

/// `201` response that contains the newly created [`Review`] resource as json.
///
/// # Panics
///
/// Will panic if it can't convert the `Review` resource to json.
#[must_use]
pub fn review_created_response(review: &Review) -> Response {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(review).unwrap(),
    )
        .into_response()
}

/// `200` response that contains an array of [`Review`] resources as json.
#[must_use]
pub fn review_list_response(reviews: &[models::review::Review]) -> Json<Vec<Review>> {
    Json(Review::new_vec(reviews))
}

/// `200` response that confirms a review was deleted.
#[must_use]
pub fn review_deleted_response() -> Response {
    Json(json!({ "message": "Review deleted successfully" })).into_response()
}
