//! The repository layer.
//!
//! Repositories give the [`Hbnb`](crate::core::Hbnb) facade a uniform way to
//! store and retrieve entities, hiding where the entities actually live.
//! There is one trait per entity and two implementations for each:
//!
//! - [`in_memory`]: keeps the entities in memory, behind a
//!   [`tokio::sync::RwLock`]. Used by the facade tests.
//! - [`database`]: persists the entities with a [`Database`](crate::core::databases::Database)
//!   driver (`SQLite3` or `MySQL`). Used in production.
//!
//! The traits do not enforce any domain rule. Uniqueness of user emails and
//! amenity names, ownership checks and the review rules belong to the facade.
pub mod database;
pub mod in_memory;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;

use crate::core::databases::error::Error;
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

/// Storage for [`User`] entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Sync + Send {
    /// It stores a new user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the user cannot be stored.
    async fn add(&self, user: &User) -> Result<(), Error>;

    /// It returns the user with the given id, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get(&self, user_id: &EntityId) -> Result<Option<User>, Error>;

    /// It returns the user with the given normalized email, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// It returns all the users.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_all(&self) -> Result<Vec<User>, Error>;

    /// It overwrites the stored user with the same id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the user cannot be stored.
    async fn update(&self, user: &User) -> Result<(), Error>;

    /// It removes the user with the given id. Returns `false` if there was
    /// no such user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be written.
    async fn delete(&self, user_id: &EntityId) -> Result<bool, Error>;
}

/// Storage for [`Place`] entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Sync + Send {
    /// It stores a new place.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the place cannot be stored.
    async fn add(&self, place: &Place) -> Result<(), Error>;

    /// It returns the place with the given id, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get(&self, place_id: &EntityId) -> Result<Option<Place>, Error>;

    /// It returns all the places.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_all(&self) -> Result<Vec<Place>, Error>;

    /// It returns the places owned by the given user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_by_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error>;

    /// It overwrites the stored place with the same id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the place cannot be stored.
    async fn update(&self, place: &Place) -> Result<(), Error>;

    /// It removes the place with the given id. Returns `false` if there was
    /// no such place.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be written.
    async fn delete(&self, place_id: &EntityId) -> Result<bool, Error>;
}

/// Storage for [`Review`] entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Sync + Send {
    /// It stores a new review.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the review cannot be stored.
    async fn add(&self, review: &Review) -> Result<(), Error>;

    /// It returns the review with the given id, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get(&self, review_id: &EntityId) -> Result<Option<Review>, Error>;

    /// It returns all the reviews.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_all(&self) -> Result<Vec<Review>, Error>;

    /// It returns the reviews written for the given place.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_by_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error>;

    /// It returns the review the given user wrote for the given place, if
    /// any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error>;

    /// It overwrites the stored review with the same id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the review cannot be stored.
    async fn update(&self, review: &Review) -> Result<(), Error>;

    /// It removes the review with the given id. Returns `false` if there was
    /// no such review.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be written.
    async fn delete(&self, review_id: &EntityId) -> Result<bool, Error>;
}

/// Storage for [`Amenity`] entities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Sync + Send {
    /// It stores a new amenity.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the amenity cannot be stored.
    async fn add(&self, amenity: &Amenity) -> Result<(), Error>;

    /// It returns the amenity with the given id, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error>;

    /// It returns the amenity with the given exact name, if any.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, Error>;

    /// It returns all the amenities.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be read.
    async fn get_all(&self) -> Result<Vec<Amenity>, Error>;

    /// It overwrites the stored amenity with the same id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the amenity cannot be stored.
    async fn update(&self, amenity: &Amenity) -> Result<(), Error>;

    /// It removes the amenity with the given id. Returns `false` if there
    /// was no such amenity.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the storage cannot be written.
    async fn delete(&self, amenity_id: &EntityId) -> Result<bool, Error>;
}
