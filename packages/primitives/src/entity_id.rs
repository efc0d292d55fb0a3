//! The unique identifier every persisted record carries.
//!
//! Identifiers are UUID v4 values. On the wire and in the database they are
//! represented as the canonical 36 character hyphenated string, for example:
//!
//! `3fa85f64-5717-4562-b3fc-2c963f66afa6`
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A unique record identifier (UUID v4).
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct EntityId(Uuid);

/// Error returned when a string is not a valid [`EntityId`].
#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid entity id: {value}")]
pub struct ParseEntityIdError {
    value: String,
}

impl EntityId {
    /// It generates a fresh random identifier.
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for EntityId {
    type Err = ParseEntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid::parse_str(s) {
            Ok(uuid) => Ok(Self(uuid)),
            Err(_) => Err(ParseEntityIdError { value: s.to_owned() }),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
