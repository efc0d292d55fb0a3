//! The `SQLite3` database driver.
use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::{DatabaseDriver, DurationSinceUnixEpoch};
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{Connection, Row};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::models::amenity::Amenity;
use crate::core::models::place::Place;
use crate::core::models::review::Review;
use crate::core::models::user::User;

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

#[async_trait]
impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return an [`Error`] if unable to connect to the database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_users_table = "
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );"
        .to_string();

        let create_places_table = "
        CREATE TABLE IF NOT EXISTS places (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            owner_id TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            FOREIGN KEY (owner_id) REFERENCES users (id)
        );"
        .to_string();

        let create_reviews_table = "
        CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY,
            text TEXT NOT NULL,
            rating INTEGER NOT NULL,
            user_id TEXT NOT NULL,
            place_id TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (place_id) REFERENCES places (id),
            UNIQUE (user_id, place_id)
        );"
        .to_string();

        let create_amenities_table = "
        CREATE TABLE IF NOT EXISTS amenities (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );"
        .to_string();

        let create_place_amenity_table = "
        CREATE TABLE IF NOT EXISTS place_amenity (
            place_id TEXT NOT NULL,
            amenity_id TEXT NOT NULL,
            PRIMARY KEY (place_id, amenity_id),
            FOREIGN KEY (place_id) REFERENCES places (id),
            FOREIGN KEY (amenity_id) REFERENCES amenities (id)
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_users_table, [])?;
        conn.execute(&create_places_table, [])?;
        conn.execute(&create_reviews_table, [])?;
        conn.execute(&create_amenities_table, [])?;
        conn.execute(&create_place_amenity_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_place_amenity_table = "DROP TABLE place_amenity;".to_string();
        let drop_reviews_table = "DROP TABLE reviews;".to_string();
        let drop_places_table = "DROP TABLE places;".to_string();
        let drop_amenities_table = "DROP TABLE amenities;".to_string();
        let drop_users_table = "DROP TABLE users;".to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_place_amenity_table, [])?;
        conn.execute(&drop_reviews_table, [])?;
        conn.execute(&drop_places_table, [])?;
        conn.execute(&drop_amenities_table, [])?;
        conn.execute(&drop_users_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::add_user`](crate::core::databases::Database::add_user).
    async fn add_user(&self, user: &User) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO users (id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            [
                user.id.to_string(),
                user.first_name.clone(),
                user.last_name.clone(),
                user.email.clone(),
                user.password_hash.clone(),
                i32::from(user.is_admin).to_string(),
                user.created_at.as_secs().to_string(),
                user.updated_at.as_secs().to_string(),
            ],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::get_user`](crate::core::databases::Database::get_user).
    async fn get_user(&self, user_id: &EntityId) -> Result<Option<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at
             FROM users WHERE id = ?",
        )?;

        let mut rows = stmt.query([user_id.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(user_from_row))
    }

    /// Refer to [`databases::Database::get_user_by_email`](crate::core::databases::Database::get_user_by_email).
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at
             FROM users WHERE email = ?",
        )?;

        let mut rows = stmt.query([email.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(user_from_row))
    }

    /// Refer to [`databases::Database::load_users`](crate::core::databases::Database::load_users).
    async fn load_users(&self) -> Result<Vec<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, email, password_hash, is_admin, created_at, updated_at FROM users",
        )?;

        let users_iter = stmt.query_map([], |row| Ok(user_from_row(row)))?;

        let users: Vec<User> = users_iter.filter_map(std::result::Result::ok).collect();

        Ok(users)
    }

    /// Refer to [`databases::Database::update_user`](crate::core::databases::Database::update_user).
    async fn update_user(&self, user: &User) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE users SET first_name = ?1, last_name = ?2, email = ?3, password_hash = ?4, is_admin = ?5, updated_at = ?6
             WHERE id = ?7",
            [
                user.first_name.clone(),
                user.last_name.clone(),
                user.email.clone(),
                user.password_hash.clone(),
                i32::from(user.is_admin).to_string(),
                user.updated_at.as_secs().to_string(),
                user.id.to_string(),
            ],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_user`](crate::core::databases::Database::remove_user).
    async fn remove_user(&self, user_id: &EntityId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM users WHERE id = ?", [user_id.to_string()])?;

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
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO places (id, title, description, price, latitude, longitude, owner_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            [
                place.id.to_string(),
                place.title.clone(),
                place.description.clone(),
                place.price.to_string(),
                place.latitude.to_string(),
                place.longitude.to_string(),
                place.owner_id.to_string(),
                place.created_at.as_secs().to_string(),
                place.updated_at.as_secs().to_string(),
            ],
        )?;

        if insert == 0 {
            return Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            });
        }

        replace_place_amenities(&conn, place)?;

        Ok(insert)
    }

    /// Refer to [`databases::Database::get_place`](crate::core::databases::Database::get_place).
    async fn get_place(&self, place_id: &EntityId) -> Result<Option<Place>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at
             FROM places WHERE id = ?",
        )?;

        let mut rows = stmt.query([place_id.to_string()])?;

        let query = rows.next()?;

        match query {
            Some(row) => {
                let amenity_ids = amenity_ids_for_place(&conn, &place_id.to_string())?;
                Ok(Some(place_from_row(row, amenity_ids)))
            }
            None => Ok(None),
        }
    }

    /// Refer to [`databases::Database::load_places`](crate::core::databases::Database::load_places).
    async fn load_places(&self) -> Result<Vec<Place>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at FROM places",
        )?;

        let places_iter = stmt.query_map([], |row| Ok(place_from_row(row, vec![])))?;

        let rows: Vec<Place> = places_iter.filter_map(std::result::Result::ok).collect();

        let mut places = Vec::with_capacity(rows.len());

        for mut place in rows {
            place.amenity_ids = amenity_ids_for_place(&conn, &place.id.to_string())?;
            places.push(place);
        }

        Ok(places)
    }

    /// Refer to [`databases::Database::get_places_for_owner`](crate::core::databases::Database::get_places_for_owner).
    async fn get_places_for_owner(&self, owner_id: &EntityId) -> Result<Vec<Place>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, price, latitude, longitude, owner_id, created_at, updated_at
             FROM places WHERE owner_id = ?",
        )?;

        let places_iter = stmt.query_map([owner_id.to_string()], |row| Ok(place_from_row(row, vec![])))?;

        let rows: Vec<Place> = places_iter.filter_map(std::result::Result::ok).collect();

        let mut places = Vec::with_capacity(rows.len());

        for mut place in rows {
            place.amenity_ids = amenity_ids_for_place(&conn, &place.id.to_string())?;
            places.push(place);
        }

        Ok(places)
    }

    /// Refer to [`databases::Database::update_place`](crate::core::databases::Database::update_place).
    async fn update_place(&self, place: &Place) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE places SET title = ?1, description = ?2, price = ?3, latitude = ?4, longitude = ?5, updated_at = ?6
             WHERE id = ?7",
            [
                place.title.clone(),
                place.description.clone(),
                place.price.to_string(),
                place.latitude.to_string(),
                place.longitude.to_string(),
                place.updated_at.as_secs().to_string(),
                place.id.to_string(),
            ],
        )?;

        conn.execute("DELETE FROM place_amenity WHERE place_id = ?", [place.id.to_string()])?;

        replace_place_amenities(&conn, place)?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_place`](crate::core::databases::Database::remove_place).
    async fn remove_place(&self, place_id: &EntityId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("DELETE FROM place_amenity WHERE place_id = ?", [place_id.to_string()])?;
        conn.execute("DELETE FROM reviews WHERE place_id = ?", [place_id.to_string()])?;

        let deleted = conn.execute("DELETE FROM places WHERE id = ?", [place_id.to_string()])?;

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
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO reviews (id, text, rating, user_id, place_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            [
                review.id.to_string(),
                review.text.clone(),
                review.rating.to_string(),
                review.user_id.to_string(),
                review.place_id.to_string(),
                review.created_at.as_secs().to_string(),
                review.updated_at.as_secs().to_string(),
            ],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::get_review`](crate::core::databases::Database::get_review).
    async fn get_review(&self, review_id: &EntityId) -> Result<Option<Review>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at FROM reviews WHERE id = ?",
        )?;

        let mut rows = stmt.query([review_id.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(review_from_row))
    }

    /// Refer to [`databases::Database::load_reviews`](crate::core::databases::Database::load_reviews).
    async fn load_reviews(&self) -> Result<Vec<Review>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, text, rating, user_id, place_id, created_at, updated_at FROM reviews")?;

        let reviews_iter = stmt.query_map([], |row| Ok(review_from_row(row)))?;

        let reviews: Vec<Review> = reviews_iter.filter_map(std::result::Result::ok).collect();

        Ok(reviews)
    }

    /// Refer to [`databases::Database::get_reviews_for_place`](crate::core::databases::Database::get_reviews_for_place).
    async fn get_reviews_for_place(&self, place_id: &EntityId) -> Result<Vec<Review>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at FROM reviews WHERE place_id = ?",
        )?;

        let reviews_iter = stmt.query_map([place_id.to_string()], |row| Ok(review_from_row(row)))?;

        let reviews: Vec<Review> = reviews_iter.filter_map(std::result::Result::ok).collect();

        Ok(reviews)
    }

    /// Refer to [`databases::Database::get_review_by_user_and_place`](crate::core::databases::Database::get_review_by_user_and_place).
    async fn get_review_by_user_and_place(&self, user_id: &EntityId, place_id: &EntityId) -> Result<Option<Review>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id, text, rating, user_id, place_id, created_at, updated_at
             FROM reviews WHERE user_id = ?1 AND place_id = ?2",
        )?;

        let mut rows = stmt.query([user_id.to_string(), place_id.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(review_from_row))
    }

    /// Refer to [`databases::Database::update_review`](crate::core::databases::Database::update_review).
    async fn update_review(&self, review: &Review) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE reviews SET text = ?1, rating = ?2, updated_at = ?3 WHERE id = ?4",
            [
                review.text.clone(),
                review.rating.to_string(),
                review.updated_at.as_secs().to_string(),
                review.id.to_string(),
            ],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_review`](crate::core::databases::Database::remove_review).
    async fn remove_review(&self, review_id: &EntityId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM reviews WHERE id = ?", [review_id.to_string()])?;

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
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            [
                amenity.id.to_string(),
                amenity.name.clone(),
                amenity.created_at.as_secs().to_string(),
                amenity.updated_at.as_secs().to_string(),
            ],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::get_amenity`](crate::core::databases::Database::get_amenity).
    async fn get_amenity(&self, amenity_id: &EntityId) -> Result<Option<Amenity>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, created_at, updated_at FROM amenities WHERE id = ?")?;

        let mut rows = stmt.query([amenity_id.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(amenity_from_row))
    }

    /// Refer to [`databases::Database::get_amenity_by_name`](crate::core::databases::Database::get_amenity_by_name).
    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, created_at, updated_at FROM amenities WHERE name = ?")?;

        let mut rows = stmt.query([name.to_string()])?;

        let query = rows.next()?;

        Ok(query.map(amenity_from_row))
    }

    /// Refer to [`databases::Database::load_amenities`](crate::core::databases::Database::load_amenities).
    async fn load_amenities(&self) -> Result<Vec<Amenity>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, name, created_at, updated_at FROM amenities")?;

        let amenities_iter = stmt.query_map([], |row| Ok(amenity_from_row(row)))?;

        let amenities: Vec<Amenity> = amenities_iter.filter_map(std::result::Result::ok).collect();

        Ok(amenities)
    }

    /// Refer to [`databases::Database::update_amenity`](crate::core::databases::Database::update_amenity).
    async fn update_amenity(&self, amenity: &Amenity) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE amenities SET name = ?1, updated_at = ?2 WHERE id = ?3",
            [
                amenity.name.clone(),
                amenity.updated_at.as_secs().to_string(),
                amenity.id.to_string(),
            ],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::remove_amenity`](crate::core::databases::Database::remove_amenity).
    async fn remove_amenity(&self, amenity_id: &EntityId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("DELETE FROM place_amenity WHERE amenity_id = ?", [amenity_id.to_string()])?;

        let deleted = conn.execute("DELETE FROM amenities WHERE id = ?", [amenity_id.to_string()])?;

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

/// It inserts one row in the `place_amenity` table for each amenity the place
/// offers. The caller is responsible for removing stale rows first.
fn replace_place_amenities(conn: &Connection, place: &Place) -> Result<(), Error> {
    for amenity_id in &place.amenity_ids {
        conn.execute(
            "INSERT OR IGNORE INTO place_amenity (place_id, amenity_id) VALUES (?1, ?2)",
            [place.id.to_string(), amenity_id.to_string()],
        )?;
    }

    Ok(())
}

fn amenity_ids_for_place(conn: &Connection, place_id: &str) -> Result<Vec<EntityId>, Error> {
    let mut stmt = conn.prepare("SELECT amenity_id FROM place_amenity WHERE place_id = ?")?;

    let ids_iter = stmt.query_map([place_id.to_string()], |row| {
        let amenity_id: String = row.get(0)?;
        Ok(amenity_id.parse::<EntityId>().unwrap())
    })?;

    Ok(ids_iter.filter_map(std::result::Result::ok).collect())
}

fn user_from_row(row: &Row<'_>) -> User {
    User {
        id: row.get_unwrap::<_, String>(0).parse::<EntityId>().unwrap(),
        first_name: row.get_unwrap(1),
        last_name: row.get_unwrap(2),
        email: row.get_unwrap(3),
        password_hash: row.get_unwrap(4),
        is_admin: row.get_unwrap(5),
        created_at: timestamp_from(row.get_unwrap(6)),
        updated_at: timestamp_from(row.get_unwrap(7)),
    }
}

fn place_from_row(row: &Row<'_>, amenity_ids: Vec<EntityId>) -> Place {
    Place {
        id: row.get_unwrap::<_, String>(0).parse::<EntityId>().unwrap(),
        title: row.get_unwrap(1),
        description: row.get_unwrap(2),
        price: row.get_unwrap(3),
        latitude: row.get_unwrap(4),
        longitude: row.get_unwrap(5),
        owner_id: row.get_unwrap::<_, String>(6).parse::<EntityId>().unwrap(),
        amenity_ids,
        created_at: timestamp_from(row.get_unwrap(7)),
        updated_at: timestamp_from(row.get_unwrap(8)),
    }
}

fn review_from_row(row: &Row<'_>) -> Review {
    Review {
        id: row.get_unwrap::<_, String>(0).parse::<EntityId>().unwrap(),
        text: row.get_unwrap(1),
        rating: u8::try_from(row.get_unwrap::<_, i64>(2)).unwrap(),
        user_id: row.get_unwrap::<_, String>(3).parse::<EntityId>().unwrap(),
        place_id: row.get_unwrap::<_, String>(4).parse::<EntityId>().unwrap(),
        created_at: timestamp_from(row.get_unwrap(5)),
        updated_at: timestamp_from(row.get_unwrap(6)),
    }
}

fn amenity_from_row(row: &Row<'_>) -> Amenity {
    Amenity {
        id: row.get_unwrap::<_, String>(0).parse::<EntityId>().unwrap(),
        name: row.get_unwrap(1),
        created_at: timestamp_from(row.get_unwrap(2)),
        updated_at: timestamp_from(row.get_unwrap(3)),
    }
}

fn timestamp_from(seconds: i64) -> DurationSinceUnixEpoch {
    Duration::from_secs(seconds.unsigned_abs())
}
