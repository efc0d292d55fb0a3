//! API handlers for the [`review`](crate::servers::apis::v1::context::review)
//! API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::pagination::Pagination;
use tracing::debug;

use super::forms::{AddReviewForm, UpdateReviewForm};
use super::resources::Review;
use super::responses::{review_created_response, review_deleted_response, review_list_response, review_response};
use crate::core::error::Error;
use crate::core::{Hbnb, NewReview, ReviewUpdate};
use crate::servers::apis::v1::extractors::bearer_token::Extract;
use crate::servers::apis::v1::responses::{error_response, forbidden_response};
use crate::servers::apis::{EntityIdParam, PaginationParams};

/// It handles the request to add a new review.
///
/// The authenticated user becomes the author. Users cannot review their own
/// places and cannot review the same place twice.
///
/// It returns:
///
/// - `201` with the created [`Review`] resource.
/// - `404` if the reviewed place does not exist.
/// - `400` if the review breaks one of the review rules.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#create-a-review)
/// for more information about this endpoint.
pub async fn add_review_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Json(add_review_form): Json<AddReviewForm>,
) -> Response {
    let place_id = match EntityId::from_str(&add_review_form.place_id) {
        Ok(place_id) => place_id,
        Err(_) => return error_response(&Error::PlaceNotFound),
    };

    let new_review = NewReview {
        text: add_review_form.text,
        rating: add_review_form.rating,
        user_id: claims.sub,
        place_id,
    };

    match hbnb.register_review(&new_review).await {
        Ok(review) => review_created_response(&Review::from(review)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to list the reviews.
///
/// It returns a `200` response with a json array of [`Review`] resources.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#list-reviews)
/// for more information about this endpoint.
pub async fn list_reviews_handler(State(hbnb): State<Arc<Hbnb>>, pagination: Query<PaginationParams>) -> Response {
    debug!("pagination: {:?}", pagination);

    let pagination = Pagination::new_with_options(pagination.0.offset, pagination.0.limit);

    match hbnb.get_reviews().await {
        Ok(reviews) => {
            let page: Vec<_> = reviews
                .into_iter()
                .skip(pagination.offset as usize)
                .take(pagination.limit as usize)
                .collect();

            review_list_response(&page).into_response()
        }
        Err(error) => error_response(&error),
    }
}

/// It handles the request to get one review.
///
/// It returns:
///
/// - `200` with the [`Review`] resource.
/// - `404` if no review has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#get-a-review)
/// for more information about this endpoint.
pub async fn get_review_handler(State(hbnb): State<Arc<Hbnb>>, Path(review_id): Path<EntityIdParam>) -> Response {
    let review_id = match EntityId::from_str(&review_id.0) {
        Ok(review_id) => review_id,
        Err(_) => return error_response(&Error::ReviewNotFound),
    };

    match hbnb.get_review(&review_id).await {
        Ok(review) => review_response(&Review::from(review)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to update a review.
///
/// Only the author or an administrator can update a review, and only the
/// text and the rating can change.
///
/// It returns:
///
/// - `200` with the updated [`Review`] resource.
/// - `403` if the user is neither the author nor an administrator.
/// - `404` if no review has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#update-a-review)
/// for more information about this endpoint.
pub async fn update_review_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Path(review_id): Path<EntityIdParam>,
    Json(update_review_form): Json<UpdateReviewForm>,
) -> Response {
    let review_id = match EntityId::from_str(&review_id.0) {
        Ok(review_id) => review_id,
        Err(_) => return error_response(&Error::ReviewNotFound),
    };

    let review = match hbnb.get_review(&review_id).await {
        Ok(review) => review,
        Err(error) => return error_response(&error),
    };

    if !claims.is_admin && claims.sub != review.user_id {
        return forbidden_response("Unauthorized action");
    }

    let update = ReviewUpdate {
        text: update_review_form.text,
        rating: update_review_form.rating,
    };

    match hbnb.update_review(&review_id, &update).await {
        Ok(review) => review_response(&Review::from(review)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to delete a review.
///
/// Only the author or an administrator can delete a review.
///
/// It returns:
///
/// - `200` with a confirmation message.
/// - `403` if the user is neither the author nor an administrator.
/// - `404` if no review has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#delete-a-review)
/// for more information about this endpoint.
pub async fn delete_review_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Path(review_id): Path<EntityIdParam>,
) -> Response {
    let review_id = match EntityId::from_str(&review_id.0) {
        Ok(review_id) => review_id,
        Err(_) => return error_response(&Error::ReviewNotFound),
    };

    let review = match hbnb.get_review(&review_id).await {
        Ok(review) => review,
        Err(error) => return error_response(&error),
    };

    if !claims.is_admin && claims.sub != review.user_id {
        return forbidden_response("Unauthorized action");
    }

    match hbnb.delete_review(&review_id).await {
        Ok(()) => review_deleted_response(),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to list the reviews of one place.
///
/// It returns:
///
/// - `200` with a json array of [`Review`] resources.
/// - `404` if no place has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::review#list-the-reviews-of-a-place)
/// for more information about this endpoint.
pub async fn get_place_reviews_handler(State(hbnb): State<Arc<Hbnb>>, Path(place_id): Path<EntityIdParam>) -> Response {
    let place_id = match EntityId::from_str(&place_id.0) {
        Ok(place_id) => place_id,
        Err(_) => return error_response(&Error::PlaceNotFound),
    };

    match hbnb.get_reviews_for_place(&place_id).await {
        Ok(reviews) => review_list_response(&reviews).into_response(),
        Err(error) => error_response(&error),
    }
}
