//! API handlers for the [`amenity`](crate::servers::apis::v1::context::amenity)
//! API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::pagination::Pagination;
use tracing::debug;

use super::forms::AmenityForm;
use super::resources::Amenity;
use super::responses::{amenity_created_response, amenity_list_response, amenity_response};
use crate::core::error::Error;
use crate::core::Hbnb;
use crate::servers::apis::v1::extractors::bearer_token::Extract;
use crate::servers::apis::v1::responses::{error_response, forbidden_response};
use crate::servers::apis::{EntityIdParam, PaginationParams};

/// It handles the request to add a new amenity to the catalog.
///
/// Only administrators can add amenities.
///
/// It returns:
///
/// - `201` with the created [`Amenity`] resource.
/// - `403` if the token does not belong to an administrator.
/// - `400` if the name is invalid or already taken.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::amenity#create-an-amenity)
/// for more information about this endpoint.
pub async fn create_amenity_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Json(amenity_form): Json<AmenityForm>,
) -> Response {
    if !claims.is_admin {
        return forbidden_response("Admin privileges required");
    }

    match hbnb.register_amenity(&amenity_form.name).await {
        Ok(amenity) => amenity_created_response(&Amenity::from(amenity)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to list the amenity catalog.
///
/// It returns a `200` response with a json array of [`Amenity`] resources.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::amenity#list-amenities)
/// for more information about this endpoint.
pub async fn list_amenities_handler(State(hbnb): State<Arc<Hbnb>>, pagination: Query<PaginationParams>) -> Response {
    debug!("pagination: {:?}", pagination);

    let pagination = Pagination::new_with_options(pagination.0.offset, pagination.0.limit);

    match hbnb.get_amenities().await {
        Ok(amenities) => {
            let page: Vec<_> = amenities
                .into_iter()
                .skip(pagination.offset as usize)
                .take(pagination.limit as usize)
                .collect();

            amenity_list_response(&page).into_response()
        }
        Err(error) => error_response(&error),
    }
}

/// It handles the request to get one amenity.
///
/// It returns:
///
/// - `200` with the [`Amenity`] resource.
/// - `404` if no amenity has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::amenity#get-an-amenity)
/// for more information about this endpoint.
pub async fn get_amenity_handler(State(hbnb): State<Arc<Hbnb>>, Path(amenity_id): Path<EntityIdParam>) -> Response {
    let amenity_id = match EntityId::from_str(&amenity_id.0) {
        Ok(amenity_id) => amenity_id,
        Err(_) => return error_response(&Error::AmenityNotFound),
    };

    match hbnb.get_amenity(&amenity_id).await {
        Ok(amenity) => amenity_response(&Amenity::from(amenity)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to rename an amenity.
///
/// Only administrators can rename amenities.
///
/// It returns:
///
/// - `200` with the updated [`Amenity`] resource.
/// - `403` if the token does not belong to an administrator.
/// - `404` if no amenity has the requested id.
/// - `400` if the new name is invalid or already taken.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::amenity#update-an-amenity)
/// for more information about this endpoint.
pub async fn update_amenity_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Path(amenity_id): Path<EntityIdParam>,
    Json(amenity_form): Json<AmenityForm>,
) -> Response {
    if !claims.is_admin {
        return forbidden_response("Admin privileges required");
    }

    let amenity_id = match EntityId::from_str(&amenity_id.0) {
        Ok(amenity_id) => amenity_id,
        Err(_) => return error_response(&Error::AmenityNotFound),
    };

    match hbnb.update_amenity(&amenity_id, &amenity_form.name).await {
        Ok(amenity) => amenity_response(&Amenity::from(amenity)),
        Err(error) => error_response(&error),
    }
}
