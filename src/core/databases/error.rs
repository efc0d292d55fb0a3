//! Database errors.
//!
//! This module contains the [Database errors](crate::core::databases::error::Error).
use std::panic::Location;

use hbnb_primitives::DatabaseDriver;
use r2d2_mysql::mysql::UrlError;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The query unexpectedly returned nothing.
    #[error("The {driver} query unexpectedly returned nothing: {cause}, {location}")]
    QueryReturnedNoRows {
        cause: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// The query was malformed or failed while running.
    #[error("The {driver} query was malformed: {cause}, {location}")]
    InvalidQuery {
        cause: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// Unable to insert a record into the database.
    #[error("Unable to insert record into {driver} database, {location}")]
    InsertFailed {
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// Unable to delete a record from the database. The `error_code` is the
    /// number of rows the delete statement actually removed.
    #[error("Failed to remove record from {driver} database, error-code: {error_code}, {location}")]
    DeleteFailed {
        location: &'static Location<'static>,
        error_code: usize,
        driver: DatabaseDriver,
    },

    /// Unable to connect to the database.
    #[error("Unable to connect to {driver} database: {cause}, {location}")]
    ConnectionError {
        cause: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },

    /// Unable to create a connection pool.
    #[error("Unable to create r2d2 {driver} connection pool: {cause}, {location}")]
    ConnectionPool {
        cause: String,
        location: &'static Location<'static>,
        driver: DatabaseDriver,
    },
}

impl From<r2d2_sqlite::rusqlite::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_sqlite::rusqlite::Error) -> Self {
        match err {
            r2d2_sqlite::rusqlite::Error::QueryReturnedNoRows => Error::QueryReturnedNoRows {
                cause: err.to_string(),
                location: Location::caller(),
                driver: DatabaseDriver::Sqlite3,
            },
            _ => Error::InvalidQuery {
                cause: err.to_string(),
                location: Location::caller(),
                driver: DatabaseDriver::Sqlite3,
            },
        }
    }
}

impl From<r2d2_mysql::mysql::Error> for Error {
    #[track_caller]
    fn from(err: r2d2_mysql::mysql::Error) -> Self {
        Error::InvalidQuery {
            cause: err.to_string(),
            location: Location::caller(),
            driver: DatabaseDriver::MySQL,
        }
    }
}

impl From<(UrlError, DatabaseDriver)> for Error {
    #[track_caller]
    fn from((err, driver): (UrlError, DatabaseDriver)) -> Self {
        Error::ConnectionError {
            cause: err.to_string(),
            location: Location::caller(),
            driver,
        }
    }
}

impl From<(r2d2::Error, DatabaseDriver)> for Error {
    #[track_caller]
    fn from((err, driver): (r2d2::Error, DatabaseDriver)) -> Self {
        Error::ConnectionPool {
            cause: err.to_string(),
            location: Location::caller(),
            driver,
        }
    }
}
