//! API routes for the [`user`](crate::servers::apis::v1::context::user)
//! API context.
//!
//! - `POST /users`
//! - `GET /users`
//! - `GET /users/{user_id}`
//! - `PUT /users/{user_id}`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::user).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_user_handler, get_user_handler, list_users_handler, update_user_handler};
use crate::core::Hbnb;

/// It adds the routes to the router for the [`user`](crate::servers::apis::v1::context::user) API context.
pub fn add(prefix: &str, router: Router, hbnb: Arc<Hbnb>) -> Router {
    let prefix = format!("{prefix}/users");

    router
        .route(&prefix, post(create_user_handler).get(list_users_handler).with_state(hbnb.clone()))
        .route(
            &format!("{prefix}/{{user_id}}"),
            get(get_user_handler).put(update_user_handler).with_state(hbnb),
        )
}
