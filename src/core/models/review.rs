//! The review entity: a rating and a comment a user leaves on a place.
//!
//! A user can review a place only once, and never their own place. Those
//! rules are cross-entity rules, so they are enforced by the
//! [`Hbnb`](crate::core::Hbnb) facade, not here.
use hbnb_clock::clock::Time;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::DurationSinceUnixEpoch;

use super::{required_text, ValidationError};
use crate::CurrentClock;

/// Maximum length for the review text.
pub const MAX_TEXT_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// The unique identifier of the review.
    pub id: EntityId,
    pub text: String,
    /// Rating from 1 (worst) to 5 (best).
    pub rating: u8,
    /// The id of the user who wrote the review.
    pub user_id: EntityId,
    /// The id of the reviewed place.
    pub place_id: EntityId,
    pub created_at: DurationSinceUnixEpoch,
    pub updated_at: DurationSinceUnixEpoch,
}

impl Review {
    /// Builds a new review with a random id and the current time as both
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the text is blank or too long, or
    /// if the rating is not between 1 and 5.
    pub fn new(text: &str, rating: i64, user_id: EntityId, place_id: EntityId) -> Result<Self, ValidationError> {
        let now = CurrentClock::now();

        Ok(Self {
            id: EntityId::new_random(),
            text: required_text("text", text, MAX_TEXT_LEN)?,
            rating: check_rating(rating)?,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the text is blank or too long.
    pub fn set_text(&mut self, text: &str) -> Result<(), ValidationError> {
        self.text = required_text("text", text, MAX_TEXT_LEN)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the rating is not between 1 and 5.
    pub fn set_rating(&mut self, rating: i64) -> Result<(), ValidationError> {
        self.rating = check_rating(rating)?;
        Ok(())
    }

    /// It refreshes the `updated_at` timestamp. Called whenever the entity is
    /// modified.
    pub fn touch(&mut self) {
        self.updated_at = CurrentClock::now();
    }
}

fn check_rating(rating: i64) -> Result<u8, ValidationError> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(rating as u8)
}
