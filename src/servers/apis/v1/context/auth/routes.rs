//! API routes for the [`auth`](crate::servers::apis::v1::context::auth)
//! API context.
//!
//! - `POST /auth/login`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth).
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::login_handler;
use crate::core::Hbnb;

/// It adds the routes to the router for the [`auth`](crate::servers::apis::v1::context::auth) API context.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    router.route(&format!("{prefix}/auth/login"), post(login_handler).with_state(hbnb))
}
