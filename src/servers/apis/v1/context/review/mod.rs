//! Reviews API context.
//!
//! A review is a rating from 1 to 5 and a comment a user leaves about a
//! place. Two rules are enforced when a review is created:
//!
//! - users cannot review their own places, and
//! - users can review a given place only once.
//!
//! The author of a review is always the authenticated user. Reviews can be
//! modified and deleted by their author or by an administrator.
//!
//! # Endpoints
//!
//! - [Create a review](#create-a-review)
//! - [List reviews](#list-reviews)
//! - [Get a review](#get-a-review)
//! - [Update a review](#update-a-review)
//! - [Delete a review](#delete-a-review)
//! - [List the reviews of a place](#list-the-reviews-of-a-place)
//!
//! # Create a review
//!
//! `POST /reviews`
//!
//! It creates a new review authored by the authenticated user.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `text` | string | The comment, up to 1024 characters. | Yes | `Great place to stay!`
//! `rating` | integer | From 1 (worst) to 5 (best). | Yes | `5`
//! `place_id` | UUID | The id of the reviewed place. | Yes | `a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:5000/api/v1/reviews" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"text": "Great place to stay!", "rating": 5, "place_id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!     "id": "95816a9b-4d3e-4fd6-87cc-398f2378d44e",
//!     "text": "Great place to stay!",
//!     "rating": 5,
//!     "user_id": "c6be4b45-1b42-4c17-a52e-412b593192b9",
//!     "place_id": "a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8",
//!     "created_at": "2024-01-19 10:32:51 UTC",
//!     "updated_at": "2024-01-19 10:32:51 UTC"
//! }
//! ```
//!
//! **Example error response** `400`, when reviewing your own place:
//!
//! ```json
//! {
//!     "error": "You cannot review your own place"
//! }
//! ```
//!
//! **Example error response** `400`, when reviewing a place twice:
//!
//! ```json
//! {
//!     "error": "You have already reviewed this place"
//! }
//! ```
//!
//! # List reviews
//!
//! `GET /reviews`
//!
//! It lists all the reviews. It accepts the `offset` and `limit` pagination
//! query parameters.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/reviews"
//! ```
//!
//! # Get a review
//!
//! `GET /reviews/{review_id}`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `review_id` | UUID | The id of the review. | Yes | `95816a9b-4d3e-4fd6-87cc-398f2378d44e`
//!
//! **Example error response** `404`
//!
//! ```json
//! {
//!     "error": "Review not found"
//! }
//! ```
//!
//! # Update a review
//!
//! `PUT /reviews/{review_id}`
//!
//! It updates the text and the rating of a review. Only its author or an
//! administrator can update a review. The author and the place never change.
//!
//! **Body parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `text` | string | The new comment. | No | `Nice place, noisy street.`
//! `rating` | integer | The new rating, from 1 to 5. | No | `3`
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:5000/api/v1/reviews/95816a9b-4d3e-4fd6-87cc-398f2378d44e" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!     -H "Content-Type: application/json" \
//!     --data '{"rating": 3}'
//! ```
//!
//! # Delete a review
//!
//! `DELETE /reviews/{review_id}`
//!
//! It deletes a review. Only its author or an administrator can delete it.
//!
//! **Example request**
//!
//! ```bash
//! curl -X DELETE "http://127.0.0.1:5000/api/v1/reviews/95816a9b-4d3e-4fd6-87cc-398f2378d44e" \
//!     -H "Authorization: Bearer <ACCESS_TOKEN>"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Review deleted successfully"
//! }
//! ```
//!
//! # List the reviews of a place
//!
//! `GET /places/{place_id}/reviews`
//!
//! It lists the reviews users wrote about one place.
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `place_id` | UUID | The id of the reviewed place. | Yes | `a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:5000/api/v1/places/a40d44dc-1b0f-4bb4-8e24-0e2ea30b74b8/reviews"
//! ```
//!
//! **Example error response** `404`, when the place does not exist:
//!
//! ```json
//! {
//!     "error": "Place not found"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
