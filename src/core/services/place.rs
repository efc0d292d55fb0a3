//! Core place domain services.
//!
//! There is one service:
//!
//! - [`get_place_details`]: it returns all the data about one place,
//!   including its owner, its amenities and its reviews.
use std::sync::Arc;

use hbnb_primitives::entity_id::EntityId;

use crate::core::error::Error;
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;
use crate::core::Hbnb;

/// It contains all the information the application has about a place.
///
/// It is the read model behind the place detail endpoint, which embeds the
/// owner profile and the amenity names instead of bare ids.
#[derive(Debug, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    /// The owner of the place.
    pub owner: User,
    /// The amenities the place offers, in the order the place lists them.
    pub amenities: Vec<Amenity>,
    /// The reviews users wrote about the place.
    pub reviews: Vec<Review>,
}

/// It returns all the information the application has about one place in a
/// [`PlaceDetails`] struct.
///
/// # Errors
///
/// Will return `Error::PlaceNotFound` if the place does not exist, or the
/// lookup error of any related entity that cannot be loaded.
pub async fn get_place_details(hbnb: Arc<Hbnb>, place_id: &EntityId) -> Result<PlaceDetails, Error> {
    let place = hbnb.get_place(place_id).await?;

    let owner = hbnb.get_user(&place.owner_id).await?;

    let mut amenities = Vec::with_capacity(place.amenity_ids.len());

    for amenity_id in &place.amenity_ids {
        amenities.push(hbnb.get_amenity(amenity_id).await?);
    }

    let reviews = hbnb.get_reviews_for_place(&place.id).await?;

    Ok(PlaceDetails {
        place,
        owner,
        amenities,
        reviews,
    })
}
