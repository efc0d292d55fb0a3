//! Domain entities stored and served by the [`Hbnb`](crate::core::Hbnb)
//! facade.
//!
//! There are four entities:
//!
//! - [`User`](crate::core::models::user::User): someone who owns places or
//!   reviews them.
//! - [`Place`](crate::core::models::place::Place): a rental listed by a user.
//! - [`Review`](crate::core::models::review::Review): a rating and a comment
//!   a user leaves on a place.
//! - [`Amenity`](crate::core::models::amenity::Amenity): a feature a place
//!   can offer, like "Wi-Fi".
//!
//! Every entity is identified by a random [`EntityId`](hbnb_primitives::entity_id::EntityId)
//! and keeps the `created_at` and `updated_at` timestamps.
//!
//! Constructors and setters validate their input. Invalid input is rejected
//! with a [`ValidationError`], which the API maps to a `400 Bad Request`
//! response.
pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

use thiserror::Error;

/// Error returned when an entity field does not pass validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Price must be a positive number")]
    NonPositivePrice,

    #[error("Latitude must be between -90.0 and 90.0")]
    LatitudeOutOfRange,

    #[error("Longitude must be between -180.0 and 180.0")]
    LongitudeOutOfRange,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// It trims the value and checks it is neither blank nor longer than `max`
/// characters.
pub(crate) fn required_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}

/// Same as [`required_text`] but an empty value is allowed and normalized to
/// an empty string.
pub(crate) fn optional_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}
