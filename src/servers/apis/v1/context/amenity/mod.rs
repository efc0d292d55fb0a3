//! Amenities API context.
//!
//! Amenities are the features a place can offer, like `Wi-Fi` or a swimming
//! pool. They form a catalog maintained by the administrators. Places
//! reference catalog entries by id.
//!
//! # Endpoints
//!
//! - [Create an amenity](#create-an-amenity)
//! - [List amenities](#list-amenities)
//! - [Get an amenity](#get-an-amenity)
//! - [Update an amenity](#update-an-amenity)
//!
//! # Create an amenity
//!
//! `POST /amenities`
//!
//! It adds a new amenity to the catalog. Only administrators are allowed to
//! call it.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `name` | string | Unique name, up to 50 characters. | Yes | `Wi-Fi`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/v1/amenities" \
//!     -H "Authorization: Bearer <ADMIN_ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"name": "Wi-Fi"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!     "id": "8bcbd4eb-9936-4b3c-8cd9-f2d9c2b1a0aa",
//!     "name": "Wi-Fi",
//!     "created_at": "2024-01-19 10:32:51 UTC",
//!     "updated_at": "2024-01-19 10:32:51 UTC"
//! }
//! ```
//!
//! **Example error response** `400`
//!
//! ```json
//! {
//!     "error": "Amenity name already exists"
//! }
//! ```
//!
//! # List amenities
//!
//! `GET /amenities`
//!
//! It lists the catalog. It accepts the `offset` and `limit` pagination query
//! parameters.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/amenities"
//! ```
//!
//! # Get an amenity
//!
//! `GET /amenities/{amenity_id}`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `amenity_id` | UUID | The id of the amenity. | Yes | `8bcbd4eb-9936-4b3c-8cd9-f2d9c2b1a0aa`
//!
//! **Example error response** `404`
//!
//! ```json
//! {
//!     "error": "Amenity not found"
//! }
//! ```
//!
//! # Update an amenity
//!
//! `PUT /amenities/{amenity_id}`
//!
//! It renames an amenity. Only administrators are allowed to call it.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `name` | string | The new name. It must stay unique. | Yes | `Wireless internet`
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:5000/api/v1/amenities/8bcbd4eb-9936-4b3c-8cd9-f2d9c2b1a0aa" \
//!     -H "Authorization: Bearer <ADMIN_ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"name": "Wireless internet"}'
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
