//! API routes for the [`amenity`](crate::servers::apis::v1::context::amenity)
//! API context.
//!
//! - `POST /amenities`
//! - `GET /amenities`
//! - `GET /amenities/{amenity_id}`
//! - `PUT /amenities/{amenity_id}`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::amenity).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_amenity_handler, get_amenity_handler, list_amenities_handler, update_amenity_handler};
use crate::core::Hbnb;

/// It adds the routes to the router for the [`amenity`](crate::servers::apis::v1::context::amenity) API context.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    let prefix = format!("{prefix}/amenities");

    router
        .route(
            &prefix,
            post(create_amenity_handler).get(list_amenities_handler).with_state(hbnb.clone()),
        )
        .route(
            &format!("{prefix}/{{amenity_id}}"),
            get(get_amenity_handler).put(update_amenity_handler).with_state(hbnb),
        )
}
