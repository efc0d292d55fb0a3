//! Error returned by the core [`Hbnb`](crate::core::Hbnb) facade.
//!
//! Error | Context | Description
//! ---|---|---
//! `UserNotFound` | Lookup | There is no user with the requested id.
//! `PlaceNotFound` | Lookup | There is no place with the requested id.
//! `ReviewNotFound` | Lookup | There is no review with the requested id.
//! `AmenityNotFound` | Lookup | There is no amenity with the requested id.
//! `EmailAlreadyRegistered` | Registration | A user with the same email already exists.
//! `EmailAlreadyInUse` | Update | Another user already uses the new email.
//! `AmenityNameAlreadyExists` | Registration | An amenity with the same name already exists.
//! `OwnerNotFound` | Registration | The owner of a new place does not exist.
//! `ReferencedAmenityNotFound` | Registration | A new or updated place references an amenity that does not exist.
//! `CannotReviewOwnPlace` | Business rule | Owners cannot review their own places.
//! `PlaceAlreadyReviewed` | Business rule | A user can only review a given place once.
//! `InvalidCredentials` | Authentication | Unknown email or wrong password on login.
//! `Validation` | Validation | An attribute does not satisfy the model rules.
//! `Database` | Persistence | The database driver failed.
//! `Token` | Authentication | A token could not be issued.
use hbnb_primitives::entity_id::EntityId;

use crate::core::models::ValidationError;
use crate::core::{auth, databases};

/// The error returned by every fallible operation of the core facade.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    // Lookup errors
    #[error("User not found")]
    UserNotFound,
    #[error("Place not found")]
    PlaceNotFound,
    #[error("Review not found")]
    ReviewNotFound,
    #[error("Amenity not found")]
    AmenityNotFound,

    // Business rule violations
    #[error("Email already registered")]
    EmailAlreadyRegistered,
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("Amenity name already exists")]
    AmenityNameAlreadyExists,
    #[error("Owner not found")]
    OwnerNotFound,
    #[error("Amenity not found: {id}")]
    ReferencedAmenityNotFound { id: EntityId },
    #[error("You cannot review your own place")]
    CannotReviewOwnPlace,
    #[error("You have already reviewed this place")]
    PlaceAlreadyReviewed,

    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Infrastructure errors
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: databases::error::Error,
    },
    #[error("Token error: {source}")]
    Token {
        #[from]
        source: auth::Error,
    },
}
