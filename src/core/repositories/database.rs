//! Repositories backed by a [`Database`](crate::core::databases::Database)
//! driver.
//!
//! They are thin adapters. Each repository delegates to the typed queries of
//! the driver and shares the same driver instance with the other
//! repositories.
use std::sync::Arc;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;

use super::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use crate::core::databases::error::Error;
use crate::core::databases::Database;
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

pub struct DbUserRepository {
    database: Arc<Box<dyn Database>>,
}

impl DbUserRepository {
    #[must_use]
    pub fn new(database: &Arc<Box<dyn Database>>) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl UserRepository for DbUserRepository {
    async fn add(&self, user: &User) -> Result<(), Error> {
        self.database.add_user(user).await?;
        Ok(())
    }

    async fn get(&self, user_id: &EntityId) -> Result<Option<User>, Error> {
        self.database.get_user(user_id).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.database.get_user_by_email(email).await
    }

    async fn get_all(&self) -> Result<Vec<User>, Error> {
        self.database.load_users().await
    }

    async fn update(&self, user: &User) -> Result<(), Error> {
        self.database.update_user(user).await?;
        Ok(())
    }

    async fn delete(&self, user_id: &EntityId) -> Result<bool, Error> {
        match self.database.remove_user(user_id).await {
            Ok(_) => Ok(true),
            Err(Error::DeleteFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

pub struct DbPlaceRepository {
    database: Arc<Box<dyn Database>>,
}

impl DbPlaceRepository {
    #[must_use]
    pub fn new(database: &Arc<Box<dyn Database>>) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl PlaceRepository for DbPlaceRepository {
    async fn add(&self, place: &Place) -> Result<(), Error> {
        self.database.add_place(place).await?;
        Ok(())
    }

    async fn get(&self, place_id: &EntityId) -> Result<Option<Place>, Error> {
        self.database.get_place(place_id).await
    }

    async fn get_all(&self) -> Result<Vec<Place>, Error> {
        self.database.load_places().await
    }

    async fn get_by_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error> {
        self.database.get_places_for_owner(owner_id).await
    }

    async fn update(&self, place: &Place) -> Result<(), Error> {
        self.database.update_place(place).await?;
        Ok(())
    }

    async fn delete(&self, place_id: &EntityId) -> Result<bool, Error> {
        match self.database.remove_place(place_id).await {
            Ok(_) => Ok(true),
            Err(Error::DeleteFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

pub struct DbReviewRepository {
    database: Arc<Box<dyn Database>>,
}

impl DbReviewRepository {
    #[must_use]
    pub fn new(database: &Arc<Box<dyn Database>>) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl ReviewRepository for DbReviewRepository {
    async fn add(&self, review: &Review) -> Result<(), Error> {
        self.database.add_review(review).await?;
        Ok(())
    }

    async fn get(&self, review_id: &EntityId) -> Result<Option<Review>, Error> {
        self.database.get_review(review_id).await
    }

    async fn get_all(&self) -> Result<Vec<Review>, Error> {
        self.database.load_reviews().await
    }

    async fn get_by_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error> {
        self.database.get_reviews_for_place(place_id).await
    }

    async fn get_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error> {
        self.database.get_review_by_user_and_place(user_id, place_id).await
    }

    async fn update(&self, review: &Review) -> Result<(), Error> {
        self.database.update_review(review).await?;
        Ok(())
    }

    async fn delete(&self, review_id: &EntityId) -> Result<bool, Error> {
        match self.database.remove_review(review_id).await {
            Ok(_) => Ok(true),
            Err(Error::DeleteFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

pub struct DbAmenityRepository {
    database: Arc<Box<dyn Database>>,
}

impl DbAmenityRepository {
    #[must_use]
    pub fn new(database: &Arc<Box<dyn Database>>) -> Self {
        Self {
            database: database.clone(),
        }
    }
}

#[async_trait]
impl AmenityRepository for DbAmenityRepository {
    async fn add(&self, amenity: &Amenity) -> Result<(), Error> {
        self.database.add_amenity(amenity).await?;
        Ok(())
    }

    async fn get(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error> {
        self.database.get_amenity(amenity_id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, Error> {
        self.database.get_amenity_by_name(name).await
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, Error> {
        self.database.load_amenities().await
    }

    async fn update(&self, amenity: &Amenity) -> Result<(), Error> {
        self.database.update_amenity(amenity).await?;
        Ok(())
    }

    async fn delete(&self, amenity_id: &EntityId) -> Result<bool, Error> {
        match self.database.remove_amenity(amenity_id).await {
            Ok(_) => Ok(true),
            Err(Error::DeleteFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
