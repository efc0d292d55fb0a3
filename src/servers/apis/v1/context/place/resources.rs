//! API resources for the [`place`](crate::servers::apis::v1::context::place)
//! API context.
//!
//! There are three resources for a place:
//!
//! - [`Place`]: the place attributes, with related entities as bare ids. It
//!   is the shape returned after creating or updating a place.
//! - [`ListItem`]: a compact version for the place list.
//! - [`PlaceDetails`]: the full detail, with the owner profile, the
//!   amenities and the reviews embedded.
use hbnb_clock::conv::convert_from_timestamp_to_datetime_utc;
use serde::{Deserialize, Serialize};

use crate::core::models;
use crate::core::services;
use crate::servers::apis::v1::context::amenity::resources::Amenity;
use crate::servers::apis::v1::context::review::resources::Review;
use crate::servers::apis::v1::context::user::resources::User;

/// A resource that represents a place listing.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Place {
    /// The place id.
    pub id: String,
    pub title: String,
    /// The description. An empty string means no description.
    pub description: String,
    /// The price per night.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// The id of the owner.
    pub owner_id: String,
    /// The ids of the amenities the place offers.
    pub amenities: Vec<String>,
    /// The ISO 8601 timestamp when the place was created.
    pub created_at: String,
    /// The ISO 8601 timestamp when the place was last modified.
    pub updated_at: String,
}

/// A compact resource for the place list: just enough to show a place on a
/// map or in a search result.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A resource with the full detail of one place: its attributes plus the
/// owner profile, the amenities it offers and the reviews users wrote.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceDetails {
    /// The place id.
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// The profile of the owner.
    pub owner: User,
    /// The amenities the place offers.
    pub amenities: Vec<Amenity>,
    /// The reviews users wrote about the place.
    pub reviews: Vec<Review>,
    pub created_at: String,
    pub updated_at: String,
}

impl ListItem {
    #[must_use]
    pub fn new_vec(domain_places: &[models::place::Place]) -> Vec<Self> {
        domain_places.iter().map(|place| Self::from(place.clone())).collect()
    }
}

impl From<models::place::Place> for Place {
    fn from(place: models::place::Place) -> Self {
        Self {
            id: place.id.to_string(),
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner_id: place.owner_id.to_string(),
            amenities: place.amenity_ids.iter().map(ToString::to_string).collect(),
            created_at: convert_from_timestamp_to_datetime_utc(place.created_at).to_string(),
            updated_at: convert_from_timestamp_to_datetime_utc(place.updated_at).to_string(),
        }
    }
}

impl From<models::place::Place> for ListItem {
    fn from(place: models::place::Place) -> Self {
        Self {
            id: place.id.to_string(),
            title: place.title,
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

impl From<services::place::PlaceDetails> for PlaceDetails {
    fn from(details: services::place::PlaceDetails) -> Self {
        Self {
            id: details.place.id.to_string(),
            title: details.place.title,
            description: details.place.description,
            price: details.place.price,
            latitude: details.place.latitude,
            longitude: details.place.longitude,
            owner: User::from(details.owner),
            amenities: Amenity::new_vec(&details.amenities),
            reviews: Review::new_vec(&details.reviews),
            created_at: convert_from_timestamp_to_datetime_utc(details.place.created_at).to_string(),
            updated_at: convert_from_timestamp_to_datetime_utc(details.place.updated_at).to_string(),
        }
    }
}
