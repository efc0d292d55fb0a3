//! Users API context.
//!
//! A user is an account on the application. Users own places and write
//! reviews. User profiles are public, but accounts can only be created by an
//! administrator and modified by their owner or an administrator.
//!
//! Passwords are write-only. They are stored as a `bcrypt` hash and they are
//! never included in a response.
//!
//! # Endpoints
//!
//! - [Create a user](#create-a-user)
//! - [List users](#list-users)
//! - [Get a user](#get-a-user)
//! - [Update a user](#update-a-user)
//!
//! # Create a user
//!
//! `POST /users`
//!
//! It creates a new user account. Only administrators are allowed to call it.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `first_name` | string | First name, up to 50 characters. | Yes | `John`
//! `last_name` | string | Last name, up to 50 characters. | Yes | `Doe`
//! `email` | string | Unique email address. | Yes | `john@example.com`
//! `password` | string | Plain text password, at least 6 characters. | Yes | `secret-password`
//! `is_admin` | boolean | Whether the new account is an administrator. Defaults to `false`. | No | `false`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/v1/users" \
//!     -H "Authorization: Bearer <ADMIN_ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"first_name": "John", "last_name": "Doe", "email": "john@example.com", "password": "secret-password"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!     "id": "c6be4b45-1b42-4c17-a52e-412b593192b9",
//!     "first_name": "John",
//!     "last_name": "Doe",
//!     "email": "john@example.com",
//!     "created_at": "2024-01-19 10:32:51 UTC",
//!     "updated_at": "2024-01-19 10:32:51 UTC"
//! }
//! ```
//!
//! **Example error response** `400`
//!
//! ```json
//! {
//!     "error": "Email already registered"
//! }
//! ```
//!
//! # List users
//!
//! `GET /users`
//!
//! It lists the registered users.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `offset` | positive integer | The offset of the first user to return. | No | `0`
//! `limit` | positive integer | The maximum number of users to return. | No | `10`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/users?offset=0&limit=10"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id": "c6be4b45-1b42-4c17-a52e-412b593192b9",
//!         "first_name": "John",
//!         "last_name": "Doe",
//!         "email": "john@example.com",
//!         "created_at": "2024-01-19 10:32:51 UTC",
//!         "updated_at": "2024-01-19 10:32:51 UTC"
//!     }
//! ]
//! ```
//!
//! # Get a user
//!
//! `GET /users/{user_id}`
//!
//! It returns one user profile.
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `user_id` | UUID | The id of the user. | Yes | `c6be4b45-1b42-4c17-a52e-412b593192b9`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/users/c6be4b45-1b42-4c17-a52e-412b593192b9"
//! ```
//!
//! **Example error response** `404`
//!
//! ```json
//! {
//!     "error": "User not found"
//! }
//! ```
//!
//! # Update a user
//!
//! `PUT /users/{user_id}`
//!
//! It updates a user profile. Users can update their own first and last
//! names. Administrators can update any account, including its email,
//! password and admin flag.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `first_name` | string | New first name. | No | `Johnny`
//! `last_name` | string | New last name. | No | `Doe`
//! `email` | string | New email. Only administrators. | No | `johnny@example.com`
//! `password` | string | New password. Only administrators. | No | `new-password`
//! `is_admin` | boolean | New admin flag. Only administrators. | No | `true`
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:5000/api/v1/users/c6be4b45-1b42-4c17-a52e-412b593192b9" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"first_name": "Johnny"}'
//! ```
//!
//! **Example error response** `403`, when the token belongs to another
//! non-admin user:
//!
//! ```json
//! {
//!     "error": "Unauthorized action"
//! }
//! ```
//!
//! **Example error response** `400`, when a non-admin user tries to change
//! their own email or password:
//!
//! ```json
//! {
//!     "error": "You cannot modify email or password"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
