//! Authentication services: password hashing and access tokens.
//!
//! Passwords are hashed with `bcrypt` before they are persisted. Only the
//! hash is ever stored, the plain password is dropped as soon as it has been
//! verified or hashed.
//!
//! Access tokens are JWTs signed with `HS256`. They carry the user identifier
//! and the admin flag, so handlers can authorize requests without a database
//! lookup. All tokens have an expiration time, that means they are only valid
//! during a period of time. After that time the token will no longer be
//! valid.
//!
//! You can issue a token valid for `3600` seconds from the current time with
//! the following:
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use hbnb::core::auth;
//! use hbnb::core::models::user::User;
//!
//! let secret = b"change-me";
//!
//! let password_hash = auth::hash_password("secret-password").unwrap();
//! let user = User::new("John", "Doe", "john@example.com", password_hash, false).unwrap();
//!
//! let token = auth::issue_token(&user, Duration::from_secs(3600), secret).unwrap();
//!
//! // And you can later verify it with:
//!
//! assert!(auth::verify_token(&token, secret).is_ok());
//! ```

use std::panic::Location;
use std::time::Duration;

use hbnb_clock::clock::Time;
use hbnb_primitives::entity_id::EntityId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::models::user::User;
use crate::CurrentClock;

/// The claims embedded in every access token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The authenticated user.
    pub sub: EntityId,
    /// Whether the authenticated user is an administrator.
    pub is_admin: bool,
    /// Timestamp the token was issued at.
    pub iat: u64,
    /// Timestamp, the token will be no longer valid after this timestamp.
    pub exp: u64,
}

impl Claims {
    /// It builds the claims for a user, valid for `lifetime` from the current
    /// time.
    ///
    /// # Panics
    ///
    /// Will panic if the `lifetime` added to the current time overflows the
    /// internal `Duration`.
    #[must_use]
    pub fn new(user: &User, lifetime: Duration) -> Self {
        Self {
            sub: user.id,
            is_admin: user.is_admin,
            iat: CurrentClock::now().as_secs(),
            exp: CurrentClock::now_add(&lifetime).unwrap().as_secs(),
        }
    }
}

/// It hashes a plain password with `bcrypt` and the default cost.
///
/// # Errors
///
/// Will return `Error::PasswordHash` if the hasher fails.
#[track_caller]
pub fn hash_password(plain_password: &str) -> Result<String, Error> {
    let location = Location::caller();

    bcrypt::hash(plain_password, bcrypt::DEFAULT_COST).map_err(|_e| Error::PasswordHash { location })
}

/// It checks a plain password against a stored `bcrypt` hash.
///
/// A stored hash that cannot be parsed counts as a failed verification.
#[must_use]
pub fn verify_password(plain_password: &str, password_hash: &str) -> bool {
    bcrypt::verify(plain_password, password_hash).unwrap_or(false)
}

/// It issues a signed access token for a user.
///
/// # Errors
///
/// Will return `Error::TokenIssue` if the claims cannot be serialized and
/// signed.
///
/// # Panics
///
/// Will panic if the `lifetime` added to the current time overflows the
/// internal `Duration`.
#[track_caller]
pub fn issue_token(user: &User, lifetime: Duration, secret: &[u8]) -> Result<String, Error> {
    let location = Location::caller();

    let claims = Claims::new(user, lifetime);

    debug!("Issuing token for user: {}, valid for: {:?}", user.id, lifetime);

    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret))
        .map_err(|_e| Error::TokenIssue { location })
}

/// It verifies an access token. It checks the signature and the expiration
/// date.
///
/// # Errors
///
/// Will return `Error::TokenExpired` if the expiration date has passed.
///
/// Will return `Error::TokenInvalid` if the token is malformed or was signed
/// with another secret.
#[track_caller]
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, Error> {
    let location = Location::caller();

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &Validation::new(Algorithm::HS256)).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => Error::TokenExpired { location },
            _ => Error::TokenInvalid { location },
        },
    )?;

    Ok(token_data.claims)
}

/// Authentication error. Returned when a password cannot be hashed or a token
/// cannot be issued or verified.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Failed to hash the password, {location}")]
    PasswordHash { location: &'static Location<'static> },

    #[error("Failed to issue a token, {location}")]
    TokenIssue { location: &'static Location<'static> },

    #[error("Token has expired, {location}")]
    TokenExpired { location: &'static Location<'static> },

    #[error("Token is not valid, {location}")]
    TokenInvalid { location: &'static Location<'static> },
}
