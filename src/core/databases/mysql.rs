//! The `MySQL` database driver.
use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::{DatabaseDriver, DurationSinceUnixEpoch};
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error};
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

#[async_trait]
impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to connect to the database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path).map_err(|e| (e, DRIVER))?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_users_table = "
        CREATE TABLE IF NOT EXISTS users (
            id CHAR(36) PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(100) NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        );"
        .to_string();

        let create_places_table = "
        CREATE TABLE IF NOT EXISTS places (
            id CHAR(36) PRIMARY KEY,
            title VARCHAR(100) NOT NULL,
            description VARCHAR(1024) NOT NULL,
            price DOUBLE NOT NULL,
            latitude DOUBLE NOT NULL,
            longitude DOUBLE NOT NULL,
            owner_id CHAR(36) NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (owner_id) REFERENCES users (id)
        );"
        .to_string();

        let create_reviews_table = "
        CREATE TABLE IF NOT EXISTS reviews (
            id CHAR(36) PRIMARY KEY,
            text VARCHAR(1024) NOT NULL,
            rating INTEGER NOT NULL,
            user_id CHAR(36) NOT NULL,
            place_id CHAR(36) NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (place_id) REFERENCES places (id),
            UNIQUE (user_id, place_id)
        );"
        .to_string();

        let create_amenities_table = "
        CREATE TABLE IF NOT EXISTS amenities (
            id CHAR(36) PRIMARY KEY,
            name VARCHAR(50) NOT NULL UNIQUE,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        );"
        .to_string();

        let create_place_amenity_table = "
        CREATE TABLE IF NOT EXISTS place_amenity (
            place_id CHAR(36) NOT NULL,
            amenity_id CHAR(36) NOT NULL,
            PRIMARY KEY (place_id, amenity_id),
            FOREIGN KEY (place_id) REFERENCES places (id),
            FOREIGN KEY (amenity_id) REFERENCES amenities (id)
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_users_table)
            .expect("Could not execute CREATE TABLE users");
        conn.query_drop(&create_places_table)
            .expect("Could not execute CREATE TABLE places");
        conn.query_drop(&create_reviews_table)
            .expect("Could not execute CREATE TABLE reviews");
        conn.query_drop(&create_amenities_table)
            .expect("Could not execute CREATE TABLE amenities");
        conn.query_drop(&create_place_amenity_table)
            .expect("Could not execute CREATE TABLE place_amenity");

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_place_amenity_table = "DROP TABLE `place_amenity`;".to_string();
        let drop_reviews_table = "DROP TABLE `reviews`;".to_string();
        let drop_places_table = "DROP TABLE `places`;".to_string();
        let drop_amenities_table = "DROP TABLE `amenities`;".to_string();
        let drop_users_table = "DROP TABLE `users`;".to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_place_amenity_table)
            .expect("Could not execute DROP TABLE place_amenity");
        conn.query_drop(&drop_reviews_table)
            .expect("Could not execute DROP TABLE reviews");
        conn.query_drop(&drop_places_table)
            .expect("Could not execute DROP TABLE places");
        conn.query_drop(&drop_amenities_table)
            .expect("Could not execute DROP TABLE amenities");
        conn.query_drop(&drop_users_table)
            .expect("Could not execute DROP TABLE users");

        Ok(())
    }

    /// Refer to [`databases::Database::add_user`](crate::core::databases::Database::add_user).
    async fn add_user(&self, user: &User) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO users (id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at)
             VALUES (:id, :first_name, :last_name, :email, :password_hash, :is_admin, :created_at, :updated_at)",
            params! {
                "id" => user.id.to_string(),
                "first_name" => user.first_name.clone(),
                "last_name" => user.last_name.clone(),
                "email" => user.email.clone(),
                "password_hash" => user.password_hash.clone(),
                "is_admin" => user.is_admin,
                "created_at" => user.created_at.as_secs(),
                "updated_at" => user.updated_at.as_secs(),
            },
        )?;

        Ok(1)
    }

    /// Refer to [`databases::Database::get_user`](crate::core::databases::Database::get_user).
    async fn get_user(&self, user_id: &EntityId) -> Result<Option<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<UserRow, _, _>(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at
             FROM users WHERE id = :id",
            params! { "id" => user_id.to_string() },
        )?;

        Ok(select.map(make_user))
    }

    /// Refer to [`databases::Database::get_user_by_email`](crate::core::databases::Database::get_user_by_email).
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<UserRow, _, _>(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at
             FROM users WHERE email = :email",
            params! { "email" => email.to_string() },
        )?;

        Ok(select.map(make_user))
    }

    /// Refer to [`databases::Database::load_users`](crate::core::databases::Database::load_users).
    async fn load_users(&self) -> Result<Vec<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let users = conn.query_map(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at FROM users",
            make_user,
        )?;

        Ok(users)
    }

    /// Refer to [`databases::Database::update_user`](crate::core::databases::Database::update_user).
    async fn update_user(&self, user: &User) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE users SET first_name = :first_name, last_name = :last_name, email = :email,
             password_hash = :password_hash, is_admin = :is_admin, updated_at = :updated_at
             WHERE id = :id",
            params! {
                "first_name" => user.first_name.clone(),
                "last_name" => user.last_name.clone(),
                "email" => user.email.clone(),
                "password_hash" => user.password_hash.clone(),
                "is_admin" => user.is_admin,
                "updated_at" => user.updated_at.as_secs(),
                "id" => user.id.to_string(),
            },
        )?;

        Ok(affected_rows(&mut conn))
    }

    /// Refer to [`databases::Database::remove_user`](crate::core::databases::Database::remove_user).
    async fn remove_user(&self, user_id: &EntityId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM users WHERE id = :id", params! { "id" => user_id.to_string() })?;

        let deleted = affected_rows(&mut conn);

        if deleted == 1 {
            return Ok(deleted);
        }

        Err(Error::DeleteFailed {
            location: Location::caller(),
            error_code: deleted,
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::add_place`](crate::core::databases::Database::add_place).
    async fn add_place(&self, place: &Place) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO places (id, title, description, price, latitude, longitude, owner_id, created_at, updated_at)
             VALUES (:id, :title, :description, :price, :latitude, :longitude, :owner_id, :created_at, :updated_at)",
            params! {
                "id" => place.id.to_string(),
                "title" => place.title.clone(),
                "description" => place.description.clone(),
                "price" => place.price,
                "latitude" => place.latitude,
                "longitude" => place.longitude,
                "owner_id" => place.owner_id.to_string(),
                "created_at" => place.created_at.as_secs(),
                "updated_at" => place.updated_at.as_secs(),
            },
        )?;

        replace_place_amenities(&mut *conn, place)?;

        Ok(1)
    }

    /// Refer to [`databases::Database::get_place`](crate::core::databases::Database::get_place).
    async fn get_place(&self, place_id: &EntityId) -> Result<Option<Place>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<PlaceRow, _, _>(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at
             FROM places WHERE id = :id",
            params! { "id" => place_id.to_string() },
        )?;

        match select {
            Some(row) => {
                let amenity_ids = amenity_ids_for_place(&mut *conn, &place_id.to_string())?;
                Ok(Some(make_place(row, amenity_ids)))
            }
            None => Ok(None),
        }
    }

    /// Refer to [`databases::Database::load_places`](crate::core::databases::Database::load_places).
    async fn load_places(&self) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.query_map(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at FROM places",
            |row: PlaceRow| make_place(row, vec![]),
        )?;

        let mut places = Vec::with_capacity(rows.len());

        for mut place in rows {
            place.amenity_ids = amenity_ids_for_place(&mut *conn, &place.id.to_string())?;
            places.push(place);
        }

        Ok(places)
    }

    /// Refer to [`databases::Database::get_places_for_owner`](crate::core::databases::Database::get_places_for_owner).
    async fn get_places_for_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.exec_map(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at
             FROM places WHERE owner_id = :owner_id",
            params! { "owner_id" => owner_id.to_string() },
            |row: PlaceRow| make_place(row, vec![]),
        )?;

        let mut places = Vec::with_capacity(rows.len());

        for mut place in rows {
            place.amenity_ids = amenity_ids_for_place(&mut *conn, &place.id.to_string())?;
            places.push(place);
        }

        Ok(places)
    }

    /// Refer to [`databases::Database::update_place`](crate::core::databases::Database::update_place).
    async fn update_place(&self, place: &Place) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE places SET title = :title, description = :description, price = :price,
             latitude = :latitude, longitude = :longitude, updated_at = :updated_at
             WHERE id = :id",
            params! {
                "title" => place.title.clone(),
                "description" => place.description.clone(),
                "price" => place.price,
                "latitude" => place.latitude,
                "longitude" => place.longitude,
                "updated_at" => place.updated_at.as_secs(),
                "id" => place.id.to_string(),
            },
        )?;

        let updated = affected_rows(&mut conn);

        conn.exec_drop(
            "DELETE FROM place_amenity WHERE place_id = :place_id",
            params! { "place_id" => place.id.to_string() },
        )?;

        replace_place_amenities(&mut *conn, place)?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_place`](crate::core::databases::Database::remove_place).
    async fn remove_place(&self, place_id: &EntityId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "DELETE FROM place_amenity WHERE place_id = :place_id",
            params! { "place_id" => place_id.to_string() },
        )?;
        conn.exec_drop(
            "DELETE FROM reviews WHERE place_id = :place_id",
            params! { "place_id" => place_id.to_string() },
        )?;
        conn.exec_drop("DELETE FROM places WHERE id = :id", params! { "id" => place_id.to_string() })?;

        let deleted = affected_rows(&mut conn);

        if deleted == 1 {
            return Ok(deleted);
        }

        Err(Error::DeleteFailed {
            location: Location::caller(),
            error_code: deleted,
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::add_review`](crate::core::databases::Database::add_review).
    async fn add_review(&self, review: &Review) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO reviews (id, text, rating, user_id, place_id, created_at, updated_at)
             VALUES (:id, :text, :rating, :user_id, :place_id, :created_at, :updated_at)",
            params! {
                "id" => review.id.to_string(),
                "text" => review.text.clone(),
                "rating" => review.rating,
                "user_id" => review.user_id.to_string(),
                "place_id" => review.place_id.to_string(),
                "created_at" => review.created_at.as_secs(),
                "updated_at" => review.updated_at.as_secs(),
            },
        )?;

        Ok(1)
    }

    /// Refer to [`databases::Database::get_review`](crate::core::databases::Database::get_review).
    async fn get_review(&self, review_id: &EntityId) -> Result<Option<Review>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<ReviewRow, _, _>(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at FROM reviews WHERE id = :id",
            params! { "id" => review_id.to_string() },
        )?;

        Ok(select.map(make_review))
    }

    /// Refer to [`databases::Database::load_reviews`](crate::core::databases::Database::load_reviews).
    async fn load_reviews(&self) -> Result<Vec<Review>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let reviews = conn.query_map(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at FROM reviews",
            make_review,
        )?;

        Ok(reviews)
    }

    /// Refer to [`databases::Database::get_reviews_for_place`](crate::core::databases::Database::get_reviews_for_place).
    async fn get_reviews_for_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let reviews = conn.exec_map(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at
             FROM reviews WHERE place_id = :place_id",
            params! { "place_id" => place_id.to_string() },
            make_review,
        )?;

        Ok(reviews)
    }

    /// Refer to [`databases::Database::get_review_by_user_and_place`](crate::core::databases::Database::get_review_by_user_and_place).
    async fn get_review_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<ReviewRow, _, _>(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at
             FROM reviews WHERE user_id = :user_id AND place_id = :place_id",
            params! {
                "user_id" => user_id.to_string(),
                "place_id" => place_id.to_string(),
            },
        )?;

        Ok(select.map(make_review))
    }

    /// Refer to [`databases::Database::update_review`](crate::core::databases::Database::update_review).
    async fn update_review(&self, review: &Review) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE reviews SET text = :text, rating = :rating, updated_at = :updated_at WHERE id = :id",
            params! {
                "text" => review.text.clone(),
                "rating" => review.rating,
                "updated_at" => review.updated_at.as_secs(),
                "id" => review.id.to_string(),
            },
        )?;

        Ok(affected_rows(&mut conn))
    }

    /// Refer to [`databases::Database::remove_review`](crate::core::databases::Database::remove_review).
    async fn remove_review(&self, review_id: &EntityId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM reviews WHERE id = :id", params! { "id" => review_id.to_string() })?;

        let deleted = affected_rows(&mut conn);

        if deleted == 1 {
            return Ok(deleted);
        }

        Err(Error::DeleteFailed {
            location: Location::caller(),
            error_code: deleted,
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::add_amenity`](crate::core::databases::Database::add_amenity).
    async fn add_amenity(&self, amenity: &Amenity) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (:id, :name, :created_at, :updated_at)",
            params! {
                "id" => amenity.id.to_string(),
                "name" => amenity.name.clone(),
                "created_at" => amenity.created_at.as_secs(),
                "updated_at" => amenity.updated_at.as_secs(),
            },
        )?;

        Ok(1)
    }

    /// Refer to [`databases::Database::get_amenity`](crate::core::databases::Database::get_amenity).
    async fn get_amenity(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<AmenityRow, _, _>(
            "SELECT id, name, created_at, updated_at FROM amenities WHERE id = :id",
            params! { "id" => amenity_id.to_string() },
        )?;

        Ok(select.map(make_amenity))
    }

    /// Refer to [`databases::Database::get_amenity_by_name`](crate::core::databases::Database::get_amenity_by_name).
    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<AmenityRow, _, _>(
            "SELECT id, name, created_at, updated_at FROM amenities WHERE name = :name",
            params! { "name" => name.to_string() },
        )?;

        Ok(select.map(make_amenity))
    }

    /// Refer to [`databases::Database::load_amenities`](crate::core::databases::Database::load_amenities).
    async fn load_amenities(&self) -> Result<Vec<Amenity>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let amenities = conn.query_map("SELECT id, name, created_at, updated_at FROM amenities", make_amenity)?;

        Ok(amenities)
    }

    /// Refer to [`databases::Database::update_amenity`](crate::core::databases::Database::update_amenity).
    async fn update_amenity(&self, amenity: &Amenity) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE amenities SET name = :name, updated_at = :updated_at WHERE id = :id",
            params! {
                "name" => amenity.name.clone(),
                "updated_at" => amenity.updated_at.as_secs(),
                "id" => amenity.id.to_string(),
            },
        )?;

        Ok(affected_rows(&mut conn))
    }

    /// Refer to [`databases::Database::remove_amenity`](crate::core::databases::Database::remove_amenity).
    async fn remove_amenity(&self, amenity_id: &EntityId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "DELETE FROM place_amenity WHERE amenity_id = :amenity_id",
            params! { "amenity_id" => amenity_id.to_string() },
        )?;
        conn.exec_drop("DELETE FROM amenities WHERE id = :id", params! { "id" => amenity_id.to_string() })?;

        let deleted = affected_rows(&mut conn);

        if deleted == 1 {
            return Ok(deleted);
        }

        Err(Error::DeleteFailed {
            location: Location::caller(),
            error_code: deleted,
            driver: DRIVER,
        })
    }
}

type UserRow = (String, String, String, String, String, bool, i64, i64);
type PlaceRow = (String, String, String, f64, f64, f64, String, i64, i64);
type ReviewRow = (String, String, i64, String, String, i64, i64);
type AmenityRow = (String, String, i64, i64);

/// It inserts one row in the `place_amenity` table for each amenity the place
/// offers. The caller is responsible for removing stale rows first.
fn replace_place_amenities<Q: Queryable>(conn: &mut Q, place: &Place) -> Result<(), Error> {
    for amenity_id in &place.amenity_ids {
        conn.exec_drop(
            "INSERT IGNORE INTO place_amenity (place_id, amenity_id) VALUES (:place_id, :amenity_id)",
            params! {
                "place_id" => place.id.to_string(),
                "amenity_id" => amenity_id.to_string(),
            },
        )?;
    }

    Ok(())
}

fn amenity_ids_for_place<Q: Queryable>(conn: &mut Q, place_id: &str) -> Result<Vec<EntityId>, Error> {
    let amenity_ids = conn.exec_map(
        "SELECT amenity_id FROM place_amenity WHERE place_id = :place_id",
        params! { "place_id" => place_id.to_string() },
        |amenity_id: String| amenity_id.parse::<EntityId>().unwrap(),
    )?;

    Ok(amenity_ids)
}

fn affected_rows(conn: &mut r2d2::PooledConnection<MySqlConnectionManager>) -> usize {
    usize::try_from(conn.affected_rows()).unwrap_or_default()
}

fn make_user((id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at): UserRow) -> User {
    User {
        id: id.parse::<EntityId>().unwrap(),
        first_name,
        last_name,
        email,
        password_hash,
        is_admin,
        created_at: timestamp_from(created_at),
        updated_at: timestamp_from(updated_at),
    }
}

fn make_place(
    (id, title, description, price, latitude, longitude, owner_id, created_at, updated_at): PlaceRow,
    amenity_ids: Vec<EntityId>,
) -> Place {
    Place {
        id: id.parse::<EntityId>().unwrap(),
        title,
        description,
        price,
        latitude,
        longitude,
        owner_id: owner_id.parse::<EntityId>().unwrap(),
        amenity_ids,
        created_at: timestamp_from(created_at),
        updated_at: timestamp_from(updated_at),
    }
}

fn make_review((id, text, rating, user_id, place_id, created_at, updated_at): ReviewRow) -> Review {
    Review {
        id: id.parse::<EntityId>().unwrap(),
        text,
        rating: u8::try_from(rating).unwrap(),
        user_id: user_id.parse::<EntityId>().unwrap(),
        place_id: place_id.parse::<EntityId>().unwrap(),
        created_at: timestamp_from(created_at),
        updated_at: timestamp_from(updated_at),
    }
}

fn make_amenity((id, name, created_at, updated_at): AmenityRow) -> Amenity {
    Amenity {
        id: id.parse::<EntityId>().unwrap(),
        name,
        created_at: timestamp_from(created_at),
        updated_at: timestamp_from(updated_at),
    }
}

fn timestamp_from(seconds: i64) -> DurationSinceUnixEpoch {
    Duration::from_secs(seconds.unsigned_abs())
}
