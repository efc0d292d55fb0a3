//! API resources for the [`user`](crate::servers::apis::v1::context::user)
//! API context.
use hbnb_clock::conv::convert_from_timestamp_to_datetime_utc;
use serde::{Deserialize, Serialize};

use crate::core::models;

/// A resource that represents a user account.
///
/// The password is write-only: the stored hash is never part of a resource.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct User {
    /// The user id.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// The ISO 8601 timestamp when the account was created.
    pub created_at: String,
    /// The ISO 8601 timestamp when the account was last modified.
    pub updated_at: String,
}

impl User {
    #[must_use]
    pub fn new_vec(domain_users: &[models::user::User]) -> Vec<Self> {
        domain_users.iter().map(|user| Self::from(user.clone())).collect()
    }
}

impl From<models::user::User> for User {
    fn from(user: models::user::User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: convert_from_timestamp_to_datetime_utc(user.created_at).to_string(),
            updated_at: convert_from_timestamp_to_datetime_utc(user.updated_at).to_string(),
        }
    }
}
