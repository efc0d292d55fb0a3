//! API handlers for the [`place`](crate::servers::apis::v1::context::place)
//! API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::pagination::Pagination;
use thiserror::Error;
use tracing::debug;

use super::forms::{AddPlaceForm, UpdatePlaceForm};
use super::resources::{Place, PlaceDetails};
use super::responses::{place_created_response, place_details_response, place_list_response, place_response};
use crate::core::error::Error;
use crate::core::services::place::get_place_details;
use crate::core::{Hbnb, NewPlace, PlaceUpdate};
use crate::servers::apis::v1::extractors::bearer_token::Extract;
use crate::servers::apis::v1::responses::{bad_request_response, error_response, forbidden_response};
use crate::servers::apis::{EntityIdParam, PaginationParams};

/// It handles the request to add a new place.
///
/// The authenticated user becomes the owner of the place.
///
/// It returns:
///
/// - `201` with the created [`Place`] resource.
/// - `400` if an attribute is invalid or a listed amenity does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::place#create-a-place)
/// for more information about this endpoint.
pub async fn add_place_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Json(add_place_form): Json<AddPlaceForm>,
) -> Response {
    let amenity_ids = match parse_amenity_ids(add_place_form.amenities.unwrap_or_default()) {
        Ok(amenity_ids) => amenity_ids,
        Err(error) => return bad_request_response(&error.to_string()),
    };

    let new_place = NewPlace {
        title: add_place_form.title,
        description: add_place_form.description.unwrap_or_default(),
        price: add_place_form.price,
        latitude: add_place_form.latitude,
        longitude: add_place_form.longitude,
        // The owner is always the authenticated user.
        owner_id: claims.sub,
        amenity_ids,
    };

    match hbnb.register_place(&new_place).await {
        Ok(place) => place_created_response(&Place::from(place)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to list the places.
///
/// It returns a `200` response with a json array of compact
/// [`ListItem`](crate::servers::apis::v1::context::place::resources::ListItem)
/// resources.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::place#list-places)
/// for more information about this endpoint.
pub async fn list_places_handler(State(hbnb): State<Arc<Hbnb>>, pagination: Query<PaginationParams>) -> Response {
    debug!("pagination: {:?}", pagination);

    let pagination = Pagination::new_with_options(pagination.0.offset, pagination.0.limit);

    match hbnb.get_places().await {
        Ok(places) => {
            let page: Vec<_> = places
                .into_iter()
                .skip(pagination.offset as usize)
                .take(pagination.limit as usize)
                .collect();

            place_list_response(&page).into_response()
        }
        Err(error) => error_response(&error),
    }
}

/// It handles the request to get the full detail of one place.
///
/// It returns:
///
/// - `200` with the [`PlaceDetails`] resource, which embeds the owner
///   profile, the amenities and the reviews.
/// - `404` if no place has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::place#get-a-place)
/// for more information about this endpoint.
pub async fn get_place_handler(State(hbnb): State<Arc<Hbnb>>, Path(place_id): Path<EntityIdParam>) -> Response {
    let place_id = match EntityId::from_str(&place_id.0) {
        Ok(place_id) => place_id,
        Err(_) => return error_response(&Error::PlaceNotFound),
    };

    match get_place_details(hbnb, &place_id).await {
        Ok(details) => place_details_response(&PlaceDetails::from(details)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to update a place.
///
/// Only the owner of the place or an administrator can update it. The owner
/// never changes.
///
/// It returns:
///
/// - `200` with the updated [`Place`] resource.
/// - `403` if the user is neither the owner nor an administrator.
/// - `404` if no place has the requested id.
/// - `400` if an attribute is invalid or a listed amenity does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::place#update-a-place)
/// for more information about this endpoint.
pub async fn update_place_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Path(place_id): Path<EntityIdParam>,
    Json(update_place_form): Json<UpdatePlaceForm>,
) -> Response {
    let place_id = match EntityId::from_str(&place_id.0) {
        Ok(place_id) => place_id,
        Err(_) => return error_response(&Error::PlaceNotFound),
    };

    let place = match hbnb.get_place(&place_id).await {
        Ok(place) => place,
        Err(error) => return error_response(&error),
    };

    if !claims.is_admin && claims.sub != place.owner_id {
        return forbidden_response("Unauthorized action");
    }

    let amenity_ids = match update_place_form.amenities {
        Some(raw_ids) => match parse_amenity_ids(raw_ids) {
            Ok(amenity_ids) => Some(amenity_ids),
            Err(error) => return bad_request_response(&error.to_string()),
        },
        None => None,
    };

    let update = PlaceUpdate {
        title: update_place_form.title,
        description: update_place_form.description,
        price: update_place_form.price,
        latitude: update_place_form.latitude,
        longitude: update_place_form.longitude,
        amenity_ids,
    };

    match hbnb.update_place(&place_id, &update).await {
        Ok(place) => place_response(&Place::from(place)),
        Err(error) => error_response(&error),
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid amenity id: {amenity_id}")]
    InvalidAmenityId { amenity_id: String },
}

fn parse_amenity_ids(raw_ids: Vec<String>) -> Result<Vec<EntityId>, FormError> {
    let mut amenity_ids: Vec<EntityId> = Vec::new();

    for raw_id in raw_ids {
        match EntityId::from_str(&raw_id) {
            Ok(amenity_id) => amenity_ids.push(amenity_id),
            Err(_err) => return Err(FormError::InvalidAmenityId { amenity_id: raw_id }),
        }
    }

    Ok(amenity_ids)
}
