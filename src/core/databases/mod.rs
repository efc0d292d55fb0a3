//! The persistence module.
//!
//! Persistence is currently implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. If there are any changes,
//! > the database tables need to be recreated manually.
//!
//! The persisted schema is:
//!
//! Table | Stores
//! ---|---
//! `users` | [`User`](crate::core::models::user::User) entities. Emails are unique.
//! `places` | [`Place`](crate::core::models::place::Place) entities.
//! `reviews` | [`Review`](crate::core::models::review::Review) entities. One review per user and place.
//! `amenities` | [`Amenity`](crate::core::models::amenity::Amenity) entities. Names are unique.
//! `place_amenity` | The many-to-many association between places and amenities.
//!
//! All timestamps are stored as seconds since the Unix epoch.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;

use self::error::Error;
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// It builds a new database driver for the given connection string.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the connection (or the connection pool)
    /// cannot be created.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        let database = Box::new(T::new(db_path)?);
        Ok(database)
    }
}

/// The persistence trait. It contains all the methods to interact with the
/// database.
#[async_trait]
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to connect to the database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// It creates the database tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to create the tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops all the database tables.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to drop the tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Users

    /// It adds a new user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the user.
    async fn add_user(&self, user: &User) -> Result<usize, Error>;

    /// It looks a user up by id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_user(&self, user_id: &EntityId) -> Result<Option<User>, Error>;

    /// It looks a user up by its normalized email.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// It loads all the users.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn load_users(&self) -> Result<Vec<User>, Error>;

    /// It updates all the fields of an existing user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the user.
    async fn update_user(&self, user: &User) -> Result<usize, Error>;

    /// It removes a user. Places and reviews written by the user are kept.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the user could not be removed.
    async fn remove_user(&self, user_id: &EntityId) -> Result<usize, Error>;

    // Places

    /// It adds a new place, including its amenity associations.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the place.
    async fn add_place(&self, place: &Place) -> Result<usize, Error>;

    /// It looks a place up by id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_place(&self, place_id: &EntityId) -> Result<Option<Place>, Error>;

    /// It loads all the places.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn load_places(&self) -> Result<Vec<Place>, Error>;

    /// It loads the places owned by the given user.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_places_for_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error>;

    /// It updates all the fields of an existing place and replaces its
    /// amenity associations.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the place.
    async fn update_place(&self, place: &Place) -> Result<usize, Error>;

    /// It removes a place, its amenity associations and its reviews.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the place could not be removed.
    async fn remove_place(&self, place_id: &EntityId) -> Result<usize, Error>;

    // Reviews

    /// It adds a new review.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the review.
    async fn add_review(&self, review: &Review) -> Result<usize, Error>;

    /// It looks a review up by id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_review(&self, review_id: &EntityId) -> Result<Option<Review>, Error>;

    /// It loads all the reviews.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn load_reviews(&self) -> Result<Vec<Review>, Error>;

    /// It loads the reviews written for the given place.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_reviews_for_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error>;

    /// It looks up the review the given user wrote for the given place.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_review_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error>;

    /// It updates all the fields of an existing review.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the review.
    async fn update_review(&self, review: &Review) -> Result<usize, Error>;

    /// It removes a review.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the review could not be removed.
    async fn remove_review(&self, review_id: &EntityId) -> Result<usize, Error>;

    // Amenities

    /// It adds a new amenity.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the amenity.
    async fn add_amenity(&self, amenity: &Amenity) -> Result<usize, Error>;

    /// It looks an amenity up by id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_amenity(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error>;

    /// It looks an amenity up by its exact name.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>, Error>;

    /// It loads all the amenities.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to run the query.
    async fn load_amenities(&self) -> Result<Vec<Amenity>, Error>;

    /// It updates all the fields of an existing amenity.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to save the amenity.
    async fn update_amenity(&self, amenity: &Amenity) -> Result<usize, Error>;

    /// It removes an amenity. Associations with places are removed as well.
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if the amenity could not be removed.
    async fn remove_amenity(&self, amenity_id: &EntityId) -> Result<usize, Error>;
}
