//! Hbnb domain services.
//!
//! There are two types of service:
//!
//! - The [`hbnb_factory`] that builds the facade together with its dependencies.
//! - [Read models](crate::core::services::place) that assemble data from more than one repository, like the full place details.
pub mod place;

use std::sync::Arc;

use hbnb_configuration::Configuration;

use crate::core::databases;
use crate::core::repositories::database::{DbAmenityRepository, DbPlaceRepository, DbReviewRepository, DbUserRepository};
use crate::core::Hbnb;

/// It returns a new facade building its dependencies: the database driver
/// and one SQL backed repository per entity, all sharing the same driver.
///
/// # Panics
///
/// Will panic if the database driver cannot be instantiated.
#[must_use]
pub fn hbnb_factory(config: &Configuration) -> Hbnb {
    // Initialize the database driver
    let database = match databases::driver::build(&config.db_driver, &config.db_path) {
        Ok(database) => Arc::new(database),
        Err(error) => {
            panic!("{}", error)
        }
    };

    // Initialize the HBnB facade
    Hbnb::new(
        config,
        Box::new(DbUserRepository::new(&database)),
        Box::new(DbPlaceRepository::new(&database)),
        Box::new(DbReviewRepository::new(&database)),
        Box::new(DbAmenityRepository::new(&database)),
    )
}
