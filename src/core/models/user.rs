//! The registered user entity.
//!
//! A user owns places and writes reviews. The `is_admin` flag gives the user
//! administrator privileges on the API. Passwords are never stored in plain
//! text, the entity only keeps the bcrypt hash produced by the
//! [`auth`](crate::core::auth) service.
use hbnb_clock::clock::Time;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::DurationSinceUnixEpoch;
use regex::Regex;

use super::{required_text, ValidationError};
use crate::CurrentClock;

/// Maximum length for the user first and last names.
pub const MAX_NAME_LEN: usize = 50;

/// Minimum length for the plain text password.
pub const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex should compile");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    /// The email, normalized to lowercase. It is unique across users.
    pub email: String,
    /// The bcrypt hash of the user password.
    pub password_hash: String,
    /// Whether the user has administrator privileges.
    pub is_admin: bool,
    pub created_at: DurationSinceUnixEpoch,
    pub updated_at: DurationSinceUnixEpoch,
}

impl User {
    /// Builds a new user with a random id and the current time as both
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the names are blank or too long,
    /// or if the email does not have a valid format.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: String,
        is_admin: bool,
    ) -> Result<Self, ValidationError> {
        let now = CurrentClock::now();

        Ok(Self {
            id: EntityId::new_random(),
            first_name: required_text("first_name", first_name, MAX_NAME_LEN)?,
            last_name: required_text("last_name", last_name, MAX_NAME_LEN)?,
            email: Self::check_email(email)?,
            password_hash,
            is_admin,
            created_at: now,
            updated_at: now,
        })
    }

    /// It normalizes the email to lowercase and validates its format.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the email is blank or does not
    /// look like `local@domain.tld`.
    pub fn check_email(email: &str) -> Result<String, ValidationError> {
        let normalized = email.trim().to_lowercase();

        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(normalized)
    }

    /// It checks the minimum length of a plain text password, before it gets
    /// hashed.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the password is shorter than
    /// [`MIN_PASSWORD_LEN`] characters.
    pub fn check_plain_password(password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the name is blank or too long.
    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), ValidationError> {
        self.first_name = required_text("first_name", first_name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the name is blank or too long.
    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), ValidationError> {
        self.last_name = required_text("last_name", last_name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the email format is invalid.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = Self::check_email(email)?;
        Ok(())
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }

    /// It refreshes the `updated_at` timestamp. Called whenever the entity is
    /// modified.
    pub fn touch(&mut self) {
        self.updated_at = CurrentClock::now();
    }
}
