//! Primitive types for the HBnB API.
//!
//! This module contains the basic data structures shared by the HBnB server
//! crate and the other crates in the workspace: entity identifiers,
//! pagination and the database driver selector.
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub mod entity_id;
pub mod pagination;

/// Duration since the Unix Epoch. Entity timestamps (`created_at` and
/// `updated_at`) are stored with this type.
pub type DurationSinceUnixEpoch = Duration;

/// The database management system used by the persistence layer.
///
/// Refer to:
///
/// - [MySQL](https://www.mysql.com/)
/// - [SQLite](https://www.sqlite.org/index.html)
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, derive_more::Display)]
pub enum DatabaseDriver {
    /// The `Sqlite3` driver.
    Sqlite3,
    /// The `MySQL` driver.
    MySQL,
}
