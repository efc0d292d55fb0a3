//! The core `hbnb` module contains the application logic which is independent of the delivery layer.
//!
//! It contains the domain models, the business rules and their dependencies.
//! It's a domain layer which does not specify how the end user should connect
//! to the application. Typically this module is intended to be used by higher
//! modules like the REST API in [`servers`](crate::servers).
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     REST API |> Hbnb facade |> Repositories |> Database drivers
//! ```
//!
//! # Table of contents
//!
//! - [The facade](#the-facade)
//! - [Models](#models)
//! - [Business rules](#business-rules)
//! - [Authentication](#authentication)
//! - [Persistence](#persistence)
//! - [Services](#services)
//!
//! # The facade
//!
//! The [`Hbnb`] struct is the main struct in this module. Every operation the
//! application supports is a method on the facade. The facade has some groups
//! of responsibilities:
//!
//! - **Users**: it registers user accounts and keeps their profiles up to date.
//! - **Places**: it handles the places owned by users and their amenities.
//! - **Reviews**: it handles the reviews users write about places.
//! - **Amenities**: it keeps the catalog of amenities places can offer.
//! - **Authentication**: it verifies credentials and issues access tokens.
//!
//! Once you have instantiated the `Hbnb` facade you can register a new user
//! with:
//!
//! ```text
//! let user = hbnb.register_user(&NewUser {
//!     first_name: "John".to_string(),
//!     last_name: "Doe".to_string(),
//!     email: "john@example.com".to_string(),
//!     password: "secret-password".to_string(),
//!     is_admin: false,
//! }).await?;
//! ```
//!
//! # Models
//!
//! The validated domain entities live in the [`models`] module:
//!
//! Model | Description
//! ---|---
//! [`User`] | An account. Its password is stored hashed, never in plain text.
//! [`Place`](models::place::Place) | A property listed by a user (its owner).
//! [`Review`](models::review::Review) | A rating and a comment a user leaves about a place.
//! [`Amenity`](models::amenity::Amenity) | A feature a place can offer, like `Wi-Fi`.
//!
//! Models validate their own attributes. The facade enforces the rules that
//! span more than one entity.
//!
//! # Business rules
//!
//! - Emails are unique. Registering or updating a user with an email that is
//!   already taken fails.
//! - Amenity names are unique.
//! - A place always belongs to an existing owner and can only reference
//!   amenities that exist.
//! - Users cannot review their own places, and can review a given place only
//!   once.
//!
//! # Authentication
//!
//! Login credentials are verified against the stored `bcrypt` password hash.
//! On success the facade issues a signed access token (see the
//! [`auth`] module) which carries the user id and the admin flag. The token
//! secret comes from the configuration; when it is left empty a random secret
//! is generated at startup and all tokens are invalidated on restart.
//!
//! The administrator account defined in the configuration is seeded on
//! startup with [`Hbnb::ensure_admin_account`], so a fresh deployment always
//! has an account that is allowed to create other users.
//!
//! # Persistence
//!
//! The facade does not talk to the database directly. It depends on one
//! repository per entity (see [`repositories`]). Repositories are injected,
//! so the same facade can run against:
//!
//! - The SQL backed repositories in [`repositories::database`], built on the
//!   [`databases`] drivers (`SQLite3` and `MySQL`).
//! - The [`repositories::in_memory`] repositories, for tests.
//!
//! # Services
//!
//! Besides the facade there are a few application services in the
//! [`services`] module, like the factory that wires the facade to a database
//! driver and the read model that assembles a place together with its owner,
//! amenities and reviews.
pub mod auth;
pub mod databases;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

use std::time::Duration;

use hbnb_configuration::Configuration;
use hbnb_primitives::entity_id::EntityId;
use tracing::{debug, info};

use self::error::Error;
use self::models::amenity::Amenity;
use self::models::place::Place;
use self::models::review::Review;
use self::models::user::User;
use self::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use crate::shared::crypto::ephemeral_instance_keys;

/// The domain layer application service.
///
/// Its main responsibility is to enforce the business rules that span more
/// than one entity. It's also a container for the repositories and the
/// authentication settings.
///
/// > **NOTICE**: the `Hbnb` facade is not responsible for handling the
/// > network layer. Typically, the facade is used by a higher application
/// > service that handles the network layer.
pub struct Hbnb {
    users: Box<dyn UserRepository>,
    places: Box<dyn PlaceRepository>,
    reviews: Box<dyn ReviewRepository>,
    amenities: Box<dyn AmenityRepository>,
    /// How long issued access tokens remain valid.
    token_lifetime: Duration,
    /// The secret access tokens are signed with.
    secret: Vec<u8>,
    /// Email of the administrator account seeded at startup.
    admin_email: String,
    /// Password of the administrator account seeded at startup.
    admin_password: String,
}

/// The attributes needed to register a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// The plain password. It is hashed before it is persisted.
    pub password: String,
    pub is_admin: bool,
}

/// The user attributes that can be changed. Absent attributes are kept.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Grants or revokes administrator privileges. Callers must make sure
    /// only administrators get to set it.
    pub is_admin: Option<bool>,
}

/// The attributes needed to register a new place.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// The owner. It must be an existing user.
    pub owner_id: EntityId,
    /// The amenities the place offers. They must all exist.
    pub amenity_ids: Vec<EntityId>,
}

/// The place attributes that can be changed. Absent attributes are kept.
#[derive(Debug, Clone, Default)]
pub struct PlaceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<EntityId>>,
}

/// The attributes needed to register a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub text: String,
    pub rating: i64,
    /// The author. It must be an existing user.
    pub user_id: EntityId,
    /// The reviewed place. It must be an existing place.
    pub place_id: EntityId,
}

/// The review attributes that can be changed. Absent attributes are kept.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub text: Option<String>,
    pub rating: Option<i64>,
}

impl Hbnb {
    /// `Hbnb` constructor.
    ///
    /// The repositories are injected so the facade does not know whether it
    /// is backed by a SQL database or by memory.
    #[must_use]
    pub fn new(
        config: &Configuration,
        users: Box<dyn UserRepository>,
        places: Box<dyn PlaceRepository>,
        reviews: Box<dyn ReviewRepository>,
        amenities: Box<dyn AmenityRepository>,
    ) -> Hbnb {
        Hbnb {
            users,
            places,
            reviews,
            amenities,
            token_lifetime: Duration::from_secs(config.auth.token_lifetime),
            secret: secret_from(&config.auth.secret_key),
            admin_email: config.admin.email.clone(),
            admin_password: config.admin.password.clone(),
        }
    }

    /// It registers a new user. The password is hashed before it is
    /// persisted.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Error::EmailAlreadyRegistered` if another user already
    /// uses the email.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn register_user(&self, new_user: &NewUser) -> Result<User, Error> {
        let email = User::check_email(&new_user.email)?;
        User::check_plain_password(&new_user.password)?;

        if self.users.get_by_email(&email).await?.is_some() {
            return Err(Error::EmailAlreadyRegistered);
        }

        let password_hash = auth::hash_password(&new_user.password)?;

        let user = User::new(&new_user.first_name, &new_user.last_name, &email, password_hash, new_user.is_admin)?;

        self.users.add(&user).await?;

        Ok(user)
    }

    /// It returns the user with the given id.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Error::UserNotFound` if the user does not exist.
    pub async fn get_user(&self, user_id: &EntityId) -> Result<User, Error> {
        self.users.get(user_id).await?.ok_or(Error::UserNotFound)
    }

    /// It returns the user registered with the given email.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Error::UserNotFound` if no user uses the email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, Error> {
        let email = User::check_email(email).map_err(|_| Error::UserNotFound)?;

        self.users.get_by_email(&email).await?.ok_or(Error::UserNotFound)
    }

    /// It returns all the users.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if the repository fails.
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.get_all().await?)
    }

    /// It updates the profile of a user. Only the provided attributes are
    /// changed.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Error::UserNotFound` if the user does not exist.
    ///
    /// Will return `Error::EmailAlreadyInUse` if another user already uses
    /// the new email.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn update_user(&self, user_id: &EntityId, update: &UserUpdate) -> Result<User, Error> {
        let mut user = self.get_user(user_id).await?;

        if let Some(first_name) = &update.first_name {
            user.set_first_name(first_name)?;
        }

        if let Some(last_name) = &update.last_name {
            user.set_last_name(last_name)?;
        }

        if let Some(email) = &update.email {
            let email = User::check_email(email)?;

            if let Some(other) = self.users.get_by_email(&email).await? {
                if other.id != user.id {
                    return Err(Error::EmailAlreadyInUse);
                }
            }

            user.set_email(&email)?;
        }

        if let Some(password) = &update.password {
            User::check_plain_password(password)?;
            user.set_password_hash(auth::hash_password(password)?);
        }

        if let Some(is_admin) = update.is_admin {
            user.is_admin = is_admin;
        }

        user.touch();

        self.users.update(&user).await?;

        Ok(user)
    }

    /// It makes sure the administrator account from the configuration
    /// exists.
    ///
    /// The account is created the first time the application starts against
    /// an empty database. An existing account is never overwritten.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return an error if the account cannot be validated or persisted.
    pub async fn ensure_admin_account(&self) -> Result<(), Error> {
        let email = User::check_email(&self.admin_email)?;

        if self.users.get_by_email(&email).await?.is_some() {
            debug!("Administrator account already exists: {}", email);
            return Ok(());
        }

        let admin = self
            .register_user(&NewUser {
                first_name: "Admin".to_string(),
                last_name: "HBnB".to_string(),
                email,
                password: self.admin_password.clone(),
                is_admin: true,
            })
            .await?;

        info!("Created the administrator account: {}", admin.email);

        Ok(())
    }

    /// It verifies the login credentials of a user.
    ///
    /// An unknown email and a wrong password return the same error, so the
    /// response does not reveal which emails are registered.
    ///
    /// # Context: Authentication
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidCredentials` if the email is unknown or
    /// the password does not match.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, Error> {
        let email = match User::check_email(email) {
            Ok(email) => email,
            Err(_) => return Err(Error::InvalidCredentials),
        };

        match self.users.get_by_email(&email).await? {
            Some(user) if auth::verify_password(password, &user.password_hash) => Ok(user),
            _ => Err(Error::InvalidCredentials),
        }
    }

    /// It issues an access token for a user, valid for the configured
    /// lifetime.
    ///
    /// # Context: Authentication
    ///
    /// # Errors
    ///
    /// Will return an `auth::Error` if the token cannot be signed.
    pub fn issue_token_for(&self, user: &User) -> Result<String, Error> {
        Ok(auth::issue_token(user, self.token_lifetime, &self.secret)?)
    }

    /// It verifies an access token and returns the claims it carries.
    ///
    /// # Context: Authentication
    ///
    /// # Errors
    ///
    /// Will return an `auth::Error` if the token is expired, malformed or
    /// was signed with another secret.
    pub fn verify_token(&self, token: &str) -> Result<auth::Claims, auth::Error> {
        auth::verify_token(token, &self.secret)
    }

    /// It registers a new amenity.
    ///
    /// # Context: Amenities
    ///
    /// # Errors
    ///
    /// Will return `Error::AmenityNameAlreadyExists` if an amenity with the
    /// same name already exists.
    ///
    /// Will return `Error::Validation` if the name does not satisfy the
    /// model rules.
    pub async fn register_amenity(&self, name: &str) -> Result<Amenity, Error> {
        let amenity = Amenity::new(name)?;

        if self.amenities.get_by_name(&amenity.name).await?.is_some() {
            return Err(Error::AmenityNameAlreadyExists);
        }

        self.amenities.add(&amenity).await?;

        Ok(amenity)
    }

    /// It returns the amenity with the given id.
    ///
    /// # Context: Amenities
    ///
    /// # Errors
    ///
    /// Will return `Error::AmenityNotFound` if the amenity does not exist.
    pub async fn get_amenity(&self, amenity_id: &EntityId) -> Result<Amenity, Error> {
        self.amenities.get(amenity_id).await?.ok_or(Error::AmenityNotFound)
    }

    /// It returns all the amenities.
    ///
    /// # Context: Amenities
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if the repository fails.
    pub async fn get_amenities(&self) -> Result<Vec<Amenity>, Error> {
        Ok(self.amenities.get_all().await?)
    }

    /// It renames an amenity.
    ///
    /// # Context: Amenities
    ///
    /// # Errors
    ///
    /// Will return `Error::AmenityNotFound` if the amenity does not exist.
    ///
    /// Will return `Error::AmenityNameAlreadyExists` if another amenity
    /// already uses the new name.
    pub async fn update_amenity(&self, amenity_id: &EntityId, name: &str) -> Result<Amenity, Error> {
        let mut amenity = self.get_amenity(amenity_id).await?;

        amenity.set_name(name)?;

        if let Some(other) = self.amenities.get_by_name(&amenity.name).await? {
            if other.id != amenity.id {
                return Err(Error::AmenityNameAlreadyExists);
            }
        }

        amenity.touch();

        self.amenities.update(&amenity).await?;

        Ok(amenity)
    }

    /// It registers a new place.
    ///
    /// # Context: Places
    ///
    /// # Errors
    ///
    /// Will return `Error::OwnerNotFound` if the owner does not exist.
    ///
    /// Will return `Error::ReferencedAmenityNotFound` if the place
    /// references an amenity that does not exist.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn register_place(&self, new_place: &NewPlace) -> Result<Place, Error> {
        if self.users.get(&new_place.owner_id).await?.is_none() {
            return Err(Error::OwnerNotFound);
        }

        let amenity_ids = self.checked_amenity_ids(&new_place.amenity_ids).await?;

        let place = Place::new(
            &new_place.title,
            &new_place.description,
            new_place.price,
            new_place.latitude,
            new_place.longitude,
            new_place.owner_id,
            amenity_ids,
        )?;

        self.places.add(&place).await?;

        Ok(place)
    }

    /// It returns the place with the given id.
    ///
    /// # Context: Places
    ///
    /// # Errors
    ///
    /// Will return `Error::PlaceNotFound` if the place does not exist.
    pub async fn get_place(&self, place_id: &EntityId) -> Result<Place, Error> {
        self.places.get(place_id).await?.ok_or(Error::PlaceNotFound)
    }

    /// It returns all the places.
    ///
    /// # Context: Places
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if the repository fails.
    pub async fn get_places(&self) -> Result<Vec<Place>, Error> {
        Ok(self.places.get_all().await?)
    }

    /// It updates a place. Only the provided attributes are changed.
    ///
    /// # Context: Places
    ///
    /// # Errors
    ///
    /// Will return `Error::PlaceNotFound` if the place does not exist.
    ///
    /// Will return `Error::ReferencedAmenityNotFound` if the new amenity
    /// list references an amenity that does not exist.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn update_place(&self, place_id: &EntityId, update: &PlaceUpdate) -> Result<Place, Error> {
        let mut place = self.get_place(place_id).await?;

        if let Some(title) = &update.title {
            place.set_title(title)?;
        }

        if let Some(description) = &update.description {
            place.set_description(description)?;
        }

        if let Some(price) = update.price {
            place.set_price(price)?;
        }

        if let Some(latitude) = update.latitude {
            place.set_latitude(latitude)?;
        }

        if let Some(longitude) = update.longitude {
            place.set_longitude(longitude)?;
        }

        if let Some(amenity_ids) = &update.amenity_ids {
            place.set_amenities(self.checked_amenity_ids(amenity_ids).await?);
        }

        place.touch();

        self.places.update(&place).await?;

        Ok(place)
    }

    /// It registers a new review.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return `Error::UserNotFound` or `Error::PlaceNotFound` if the
    /// author or the place do not exist.
    ///
    /// Will return `Error::CannotReviewOwnPlace` if the author owns the
    /// place.
    ///
    /// Will return `Error::PlaceAlreadyReviewed` if the author has already
    /// reviewed the place.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn register_review(&self, new_review: &NewReview) -> Result<Review, Error> {
        if self.users.get(&new_review.user_id).await?.is_none() {
            return Err(Error::UserNotFound);
        }

        let place = self.get_place(&new_review.place_id).await?;

        if place.owner_id == new_review.user_id {
            return Err(Error::CannotReviewOwnPlace);
        }

        if self
            .reviews
            .get_by_user_and_place(&new_review.user_id, &new_review.place_id)
            .await?
            .is_some()
        {
            return Err(Error::PlaceAlreadyReviewed);
        }

        let review = Review::new(&new_review.text, new_review.rating, new_review.user_id, new_review.place_id)?;

        self.reviews.add(&review).await?;

        Ok(review)
    }

    /// It returns the review with the given id.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return `Error::ReviewNotFound` if the review does not exist.
    pub async fn get_review(&self, review_id: &EntityId) -> Result<Review, Error> {
        self.reviews.get(review_id).await?.ok_or(Error::ReviewNotFound)
    }

    /// It returns all the reviews.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if the repository fails.
    pub async fn get_reviews(&self) -> Result<Vec<Review>, Error> {
        Ok(self.reviews.get_all().await?)
    }

    /// It returns all the reviews written about a place.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return `Error::PlaceNotFound` if the place does not exist.
    pub async fn get_reviews_for_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error> {
        let place = self.get_place(place_id).await?;

        Ok(self.reviews.get_by_place(&place.id).await?)
    }

    /// It updates a review. Only the provided attributes are changed.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return `Error::ReviewNotFound` if the review does not exist.
    ///
    /// Will return `Error::Validation` if an attribute does not satisfy the
    /// model rules.
    pub async fn update_review(&self, review_id: &EntityId, update: &ReviewUpdate) -> Result<Review, Error> {
        let mut review = self.get_review(review_id).await?;

        if let Some(text) = &update.text {
            review.set_text(text)?;
        }

        if let Some(rating) = update.rating {
            review.set_rating(rating)?;
        }

        review.touch();

        self.reviews.update(&review).await?;

        Ok(review)
    }

    /// It deletes a review.
    ///
    /// # Context: Reviews
    ///
    /// # Errors
    ///
    /// Will return `Error::ReviewNotFound` if the review does not exist.
    pub async fn delete_review(&self, review_id: &EntityId) -> Result<(), Error> {
        let review = self.get_review(review_id).await?;

        self.reviews.delete(&review.id).await?;

        Ok(())
    }

    /// It checks that every referenced amenity exists and drops duplicated
    /// ids, keeping the original order.
    async fn checked_amenity_ids(&self, amenity_ids: &[EntityId]) -> Result<Vec<EntityId>, Error> {
        let mut ids = Vec::new();

        for amenity_id in amenity_ids {
            if self.amenities.get(amenity_id).await?.is_none() {
                return Err(Error::ReferencedAmenityNotFound { id: *amenity_id });
            }

            if !ids.contains(amenity_id) {
                ids.push(*amenity_id);
            }
        }

        Ok(ids)
    }
}

fn secret_from(secret_key: &str) -> Vec<u8> {
    if secret_key.is_empty() {
        ephemeral_instance_keys::RANDOM_SEED.to_vec()
    } else {
        secret_key.as_bytes().to_vec()
    }
}
