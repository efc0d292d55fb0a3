//! Places API context.
//!
//! A place is a rental listed by a user, the owner. Places carry a price per
//! night, coordinates and an optional set of amenities from the catalog.
//!
//! Anyone can browse places. Creating a place requires authentication, and
//! the authenticated user becomes the owner. Updating a place is restricted
//! to its owner and to administrators.
//!
//! # Endpoints
//!
//! - [Create a place](#create-a-place)
//! - [List places](#list-places)
//! - [Get a place](#get-a-place)
//! - [Update a place](#update-a-place)
//!
//! # Create a place
//!
//! `POST /places`
//!
//! It creates a new place owned by the authenticated user.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `title` | string | The title, up to 100 characters. | Yes | `Cozy loft`
//! `description` | string | A description, up to 1024 characters. | No | `A loft in the city center`
//! `price` | number | The price per night. Must be positive. | Yes | `80.0`
//! `latitude` | number | Between -90.0 and 90.0. | Yes | `48.85`
//! `longitude` | number | Between -180.0 and 180.0. | Yes | `2.35`
//! `amenities` | array | Ids of amenities from the catalog. | No | `["52b6e617-5a73-480b-bbd8-e0a541f9e829"]`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/v1/places" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"title": "Cozy loft", "description": "A loft in the city center", "price": 80.0, "latitude": 48.85, "longitude": 2.35, "amenities": ["52b6e617-5a73-480b-bbd8-e0a541f9e829"]}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!     "id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8",
//!     "title": "Cozy loft",
//!     "description": "A loft in the city center",
//!     "price": 80.0,
//!     "latitude": 48.85,
//!     "longitude": 2.35,
//!     "owner_id": "c6be4b45-1b42-4c17-a52e-412b593192b9",
//!     "amenities": ["52b6e617-5a73-480b-bbd8-e0a541f9e829"],
//!     "created_at": "2024-01-19 10:32:51 UTC",
//!     "updated_at": "2024-01-19 10:32:51 UTC"
//! }
//! ```
//!
//! All the amenities must exist in the catalog. Otherwise the API returns a
//! `400` response:
//!
//! ```json
//! {
//!     "error": "Amenity not found: 52b6e617-5a73-480b-bbd8-e0a541f9e829"
//! }
//! ```
//!
//! # List places
//!
//! `GET /places`
//!
//! It lists all the places. The list is compact: it only contains the id,
//! the title and the coordinates of each place. Use the [place detail
//! endpoint](#get-a-place) to get the rest. It accepts the `offset` and
//! `limit` pagination query parameters.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/places"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8",
//!         "title": "Cozy loft",
//!         "latitude": 48.85,
//!         "longitude": 2.35
//!     }
//! ]
//! ```
//!
//! # Get a place
//!
//! `GET /places/{place_id}`
//!
//! It returns all the information about one place: its attributes, the
//! profile of its owner, the amenities it offers and the reviews users wrote
//! about it.
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `place_id` | UUID | The id of the place. | Yes | `a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/places/a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8",
//!     "title": "Cozy loft",
//!     "description": "A loft in the city center",
//!     "price": 80.0,
//!     "latitude": 48.85,
//!     "longitude": 2.35,
//!     "owner": {
//!         "id": "c6be4b45-1b42-4c17-a52e-412b593192b9",
//!         "first_name": "John",
//!         "last_name": "Doe",
//!         "email": "john@example.com",
//!         "created_at": "2024-01-19 10:32:51 UTC",
//!         "updated_at": "2024-01-19 10:32:51 UTC"
//!     },
//!     "amenities": [
//!         {
//!             "id": "52b6e617-5a73-480b-bbd8-e0a541f9e829",
//!             "name": "Wi-Fi",
//!             "created_at": "2024-01-19 10:32:51 UTC",
//!             "updated_at": "2024-01-19 10:32:51 UTC"
//!         }
//!     ],
//!     "reviews": [
//!         {
//!             "id": "95816a9b-4d3e-4fd6-87cc-398f2378d44e",
//!             "text": "Great place to stay!",
//!             "rating": 5,
//!             "user_id": "77dbbe62-2a46-4314-ae2b-c1d70f9b9f7e",
//!             "place_id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8",
//!             "created_at": "2024-01-19 10:32:51 UTC",
//!             "updated_at": "2024-01-19 10:32:51 UTC"
//!         }
//!     ],
//!     "created_at": "2024-01-19 10:32:51 UTC",
//!     "updated_at": "2024-01-19 10:32:51 UTC"
//! }
//! ```
//!
//! **Example error response** `404`
//!
//! ```json
//! {
//!     "error": "Place not found"
//! }
//! ```
//!
//! # Update a place
//!
//! `PUT /places/{place_id}`
//!
//! It updates a place. Only the owner of the place or an administrator can
//! update it. The owner never changes. Absent attributes are kept unchanged.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `title` | string | The new title. | No | `Cozy loft downtown`
//! `description` | string | The new description. | No | `A loft in the city center`
//! `price` | number | The new price per night. | No | `95.0`
//! `latitude` | number | The new latitude. | No | `48.85`
//! `longitude` | number | The new longitude. | No | `2.35`
//! `amenities` | array | The new list of amenity ids. It replaces the old one. | No | `[]`
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:5000/api/v1/places/a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"price": 95.0}'
//! ```
//!
//! **Example error response** `403`, when the user is not the owner:
//!
//! ```json
//! {
//!     "error": "Unauthorized action"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
