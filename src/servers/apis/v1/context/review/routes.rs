//! API routes for the [`review`](crate::servers::apis::v1::context::review)
//! API context.
//!
//! - `POST /reviews`
//! - `GET /reviews`
//! - `GET /reviews/{review_id}`
//! - `PUT /reviews/{review_id}`
//! - `DELETE /reviews/{review_id}`
//! - `GET /places/{place_id}/reviews`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_review_handler, delete_review_handler, get_place_reviews_handler, get_review_handler, list_reviews_handler,
    update_review_handler,
};
use crate::core::Hbnb;

/// It adds the routes to the router for the [`review`](crate::servers::apis::v1::context::review) API context.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    let reviews_prefix = format!("{prefix}/reviews");

    router
        .route(
            &reviews_prefix,
            post(add_review_handler).get(list_reviews_handler).with_state(hbnb.clone()),
        )
        .route(
            &format!("{reviews_prefix}/{{review_id}}"),
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler)
                .with_state(hbnb.clone()),
        )
        .route(
            &format!("{prefix}/places/{{place_id}}/reviews"),
            get(get_place_reviews_handler).with_state(hbnb),
        )
}
