//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{amenity, auth, place, review, user};
use crate::core::Hbnb;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    let v1_prefix = format!("{prefix}/v1");

    let router = auth::routes::add(&v1_prefix, router, hbnb.clone());
    let router = user::routes::add(&v1_prefix, router, hbnb.clone());
    let router = amenity::routes::add(&v1_prefix, router, hbnb.clone());
    let router = place::routes::add(&v1_prefix, router, hbnb.clone());

    review::routes::add(&v1_prefix, router, hbnb)
}
