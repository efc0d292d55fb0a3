//! Repositories that keep the entities in memory.
//!
//! Entities are stored in a [`BTreeMap`] behind a [`RwLock`], so lookups by
//! id are cheap and the repositories can be shared across request handlers.
//! All the finders scan the map.
//!
//! Nothing is persisted. These repositories are mainly used by tests, where
//! a database would only slow things down.
use std::collections::BTreeMap;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;
use tokio::sync::RwLock;

use super::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use crate::core::databases::error::Error;
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

/// Shared storage for one entity type.
struct Store<T> {
    entries: RwLock<BTreeMap<EntityId, T>>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Clone> Store<T> {
    async fn insert(&self, id: EntityId, value: T) {
        self.entries.write().await.insert(id, value);
    }

    async fn get(&self, id: &EntityId) -> Option<T> {
        self.entries.read().await.get(id).cloned()
    }

    async fn values(&self) -> Vec<T> {
        self.entries.read().await.values().cloned().collect()
    }

    async fn remove(&self, id: &EntityId) -> Option<T> {
        self.entries.write().await.remove(id)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Store<User>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: &User) -> Result<(), Error> {
        self.users.insert(user.id, user.clone()).await;
        Ok(())
    }

    async fn get(&self, user_id: &EntityId) -> Result<Option<User>, Error> {
        Ok(self.users.get(user_id).await)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.users.values().await.into_iter().find(|user| user.email == email))
    }

    async fn get_all(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.values().await)
    }

    async fn update(&self, user: &User) -> Result<(), Error> {
        self.users.insert(user.id, user.clone()).await;
        Ok(())
    }

    async fn delete(&self, user_id: &EntityId) -> Result<bool, Error> {
        Ok(self.users.remove(user_id).await.is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPlaceRepository {
    places: Store<Place>,
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn add(&self, place: &Place) -> Result<(), Error> {
        self.places.insert(place.id, place.clone()).await;
        Ok(())
    }

    async fn get(&self, place_id: &EntityId) -> Result<Option<Place>, Error> {
        Ok(self.places.get(place_id).await)
    }

    async fn get_all(&self) -> Result<Vec<Place>, Error> {
        Ok(self.places.values().await)
    }

    async fn get_by_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error> {
        Ok(self
            .places
            .values()
            .await
            .into_iter()
            .filter(|place| place.owner_id == *owner_id)
            .collect())
    }

    async fn update(&self, place: &Place) -> Result<(), Error> {
        self.places.insert(place.id, place.clone()).await;
        Ok(())
    }

    async fn delete(&self, place_id: &EntityId) -> Result<bool, Error> {
        Ok(self.places.remove(place_id).await.is_some())
    }
}

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: Store<Review>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn add(&self, review: &Review) -> Result<(), Error> {
        self.reviews.insert(review.id, review.clone()).await;
        Ok(())
    }

    async fn get(&self, review_id: &EntityId) -> Result<Option<Review>, Error> {
        Ok(self.reviews.get(review_id).await)
    }

    async fn get_all(&self) -> Result<Vec<Review>, Error> {
        Ok(self.reviews.values().await)
    }

    async fn get_by_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error> {
        Ok(self
            .reviews
            .values()
            .await
            .into_iter()
            .filter(|review| review.place_id == *place_id)
            .collect())
    }

    async fn get_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error> {
        Ok(self
            .reviews
            .values()
            .await
            .into_iter()
            .find(|review| review.user_id == *user_id && review.place_id == *place_id))
    }

    async fn update(&self, review: &Review) -> Result<(), Error> {
        self.reviews.insert(review.id, review.clone()).await;
        Ok(())
    }

    async fn delete(&self, review_id: &EntityId) -> Result<bool, Error> {
        Ok(self.reviews.remove(review_id).await.is_some())
    }
}

#[derive(Default)]
pub struct InMemoryAmenityRepository {
    amenities: Store<Amenity>,
}

#[async_trait]
impl AmenityRepository for InMemoryAmenityRepository {
    async fn add(&self, amenity: &Amenity) -> Result<(), Error> {
        self.amenities.insert(amenity.id, amenity.clone()).await;
        Ok(())
    }

    async fn get(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error> {
        Ok(self.amenities.get(amenity_id).await)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Amenity>, Error> {
        Ok(self
            .amenities
            .values()
            .await
            .into_iter()
            .find(|amenity| amenity.name == name))
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, Error> {
        Ok(self.amenities.values().await)
    }

    async fn update(&self, amenity: &Amenity) -> Result<(), Error> {
        self.amenities.insert(amenity.id, amenity.clone()).await;
        Ok(())
    }

    async fn delete(&self, amenity_id: &EntityId) -> Result<bool, Error> {
        Ok(self.amenities.remove(amenity_id).await.is_some())
    }
}
