//! Axum [`extractors`](axum::extract) for the API v1.
pub mod bearer_token;
