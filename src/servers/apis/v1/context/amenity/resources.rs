//! API resources for the [`amenity`](crate::servers::apis::v1::context::amenity)
//! API context.
use hbnb_clock::conv::convert_from_timestamp_to_datetime_utc;
use serde::{Deserialize, Serialize};

use crate::core::models;

/// A resource that represents an amenity from the catalog.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Amenity {
    /// The amenity id.
    pub id: String,
    pub name: String,
    /// The ISO 8601 timestamp when the amenity was created.
    pub created_at: String,
    /// The ISO 8601 timestamp when the amenity was last modified.
    pub updated_at: String,
}

impl Amenity {
    #[must_use]
    pub fn new_vec(domain_amenities: &[models::amenity::Amenity]) -> Vec<Self> {
        domain_amenities.iter().map(|amenity| Self::from(amenity.clone())).collect()
    }
}

impl From<models::amenity::Amenity> for Amenity {
    fn from(amenity: models::amenity::Amenity) -> Self {
        Self {
            id: amenity.id.to_string(),
            name: amenity.name,
            created_at: convert_from_timestamp_to_datetime_utc(amenity.created_at).to_string(),
            updated_at: convert_from_timestamp_to_datetime_utc(amenity.updated_at).to_string(),
        }
    }
}
