//! API resources for the [`review`](crate::servers::apis::v1::context::review)
//! API context.
use hbnb_clock::conv::convert_from_timestamp_to_datetime_utc;
use serde::{Deserialize, Serialize};

use crate::core::models;

/// A resource that represents a review a user left about a place.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Review {
    /// The review id.
    pub id: String,
    pub text: String,
    /// The rating, from 1 (worst) to 5 (best).
    pub rating: u8,
    /// The id of the author.
    pub user_id: String,
    /// The id of the reviewed place.
    pub place_id: String,
    /// The ISO 8601 timestamp when the review was created.
    pub created_at: String,
    /// The ISO 8601 timestamp when the review was last modified.
    pub updated_at: String,
}

impl Review {
    #[must_use]
    pub fn new_vec(domain_reviews: &[models::review::Review]) -> Vec<Self> {
        domain_reviews.iter().map(|review| Self::from(review.clone())).collect()
    }
}

impl From<models::review::Review> for Review {
    fn from(review: models::review::Review) -> Self {
        Self {
            id: review.id.to_string(),
            text: review.text,
            rating: review.rating,
            user_id: review.user_id.to_string(),
            place_id: review.place_id.to_string(),
            created_at: convert_from_timestamp_to_datetime_utc(review.created_at).to_string(),
            updated_at: convert_from_timestamp_to_datetime_utc(review.updated_at).to_string(),
        }
    }
}
