//! The amenity entity: a feature a place can offer, like "Wi-Fi".
//!
//! Amenity names are unique. Uniqueness is a cross-entity rule, so it is
//! enforced by the [`Hbnb`](crate::core::Hbnb) facade, not here.
use hbnb_clock::clock::Time;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::DurationSinceUnixEpoch;

use super::{required_text, ValidationError};
use crate::CurrentClock;

/// Maximum length for the amenity name.
pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    /// The unique identifier of the amenity.
    pub id: EntityId,
    pub name: String,
    pub created_at: DurationSinceUnixEpoch,
    pub updated_at: DurationSinceUnixEpoch,
}

impl Amenity {
    /// Builds a new amenity with a random id and the current time as both
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the name is blank or too long.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let now = CurrentClock::now();

        Ok(Self {
            id: EntityId::new_random(),
            name: required_text("name", name, MAX_NAME_LEN)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the name is blank or too long.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = required_text("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// It refreshes the `updated_at` timestamp. Called whenever the entity is
    /// modified.
    pub fn touch(&mut self) {
        self.updated_at = CurrentClock::now();
    }
}
