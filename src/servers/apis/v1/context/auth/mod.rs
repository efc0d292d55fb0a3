//! Authentication API context.
//!
//! Credentials are verified against the stored `bcrypt` password hash. On
//! success the endpoint returns a signed JSON Web Token carrying the user id
//! and the admin flag. The token must be sent in the `Authorization` header
//! of the requests to the protected endpoints:
//!
//! ```text
//! Authorization: Bearer <ACCESS_TOKEN>
//! ```
//!
//! # Endpoints
//!
//! - [Login](#login)
//!
//! # Login
//!
//! `POST /auth/login`
//!
//! It verifies the user credentials and returns an access token.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `email` | string | The email of a registered user. | Yes | `admin@hbnb.com`
//! `password` | string | The plain text password. | Yes | `admin123`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/v1/auth/login" \
//!     -H "Content-Type: application/json" \
//!     --data '{"email": "admin@hbnb.com", "password": "admin123"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "access_token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9..."
//! }
//! ```
//!
//! Unknown emails and wrong passwords get the same response, so the endpoint
//! does not leak which accounts exist.
//!
//! **Example error response** `401`
//!
//! ```json
//! {
//!     "error": "Invalid credentials"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
