//! The place entity: a rental listed by a user.
//!
//! A place belongs to its owner (a [`User`](crate::core::models::user::User))
//! and can offer a set of amenities, kept here as a list of amenity ids.
use hbnb_clock::clock::Time;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::DurationSinceUnixEpoch;

use super::{optional_text, required_text, ValidationError};
use crate::CurrentClock;

/// Maximum length for the place title.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length for the place description.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// The unique identifier of the place.
    pub id: EntityId,
    pub title: String,
    /// Optional description. An empty string means no description.
    pub description: String,
    /// Price per night. Always a positive number.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// The id of the user who owns the place.
    pub owner_id: EntityId,
    /// The ids of the amenities the place offers.
    pub amenity_ids: Vec<EntityId>,
    pub created_at: DurationSinceUnixEpoch,
    pub updated_at: DurationSinceUnixEpoch,
}

impl Place {
    /// Builds a new place with a random id and the current time as both
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the title or description exceed
    /// their maximum length, the price is not positive or the coordinates are
    /// out of range.
    pub fn new(
        title: &str,
        description: &str,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: EntityId,
        amenity_ids: Vec<EntityId>,
    ) -> Result<Self, ValidationError> {
        let now = CurrentClock::now();

        Ok(Self {
            id: EntityId::new_random(),
            title: required_text("title", title, MAX_TITLE_LEN)?,
            description: optional_text("description", description, MAX_DESCRIPTION_LEN)?,
            price: check_price(price)?,
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
            owner_id,
            amenity_ids,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the title is blank or too long.
    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = required_text("title", title, MAX_TITLE_LEN)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the description is too long.
    pub fn set_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = optional_text("description", description, MAX_DESCRIPTION_LEN)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the price is zero or negative.
    pub fn set_price(&mut self, price: f64) -> Result<(), ValidationError> {
        self.price = check_price(price)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the latitude is out of range.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), ValidationError> {
        self.latitude = check_latitude(latitude)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the longitude is out of range.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), ValidationError> {
        self.longitude = check_longitude(longitude)?;
        Ok(())
    }

    pub fn set_amenities(&mut self, amenity_ids: Vec<EntityId>) {
        self.amenity_ids = amenity_ids;
    }

    /// It refreshes the `updated_at` timestamp. Called whenever the entity is
    /// modified.
    pub fn touch(&mut self) {
        self.updated_at = CurrentClock::now();
    }
}

fn check_price(price: f64) -> Result<f64, ValidationError> {
    if price <= 0.0 || !price.is_finite() {
        return Err(ValidationError::NonPositivePrice);
    }

    Ok(price)
}

fn check_latitude(latitude: f64) -> Result<f64, ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange);
    }

    Ok(latitude)
}

fn check_longitude(longitude: f64) -> Result<f64, ValidationError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange);
    }

    Ok(longitude)
}
