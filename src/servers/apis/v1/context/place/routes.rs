//! API routes for the [`place`](crate::servers::apis::v1::context::place)
//! API context.
//!
//! - `POST /places`
//! - `GET /places`
//! - `GET /places/{place_id}`
//! - `PUT /places/{place_id}`
//!
//! The nested route `GET /places/{place_id}/reviews` belongs to the
//! [`review`](crate::servers::apis::v1::context::review) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::place).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{add_place_handler, get_place_handler, list_places_handler, update_place_handler};
use crate::core::Hbnb;

/// It adds the routes to the router for the [`place`](crate::servers::apis::v1::context::place) API context.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    let prefix = format!("{prefix}/places");

    router
        .route(
            &prefix,
            post(add_place_handler).get(list_places_handler).with_state(hbnb.clone()),
        )
        .route(
            &format!("{prefix}/{{place_id}}"),
            get(get_place_handler).put(update_place_handler).with_state(hbnb),
        )
}
