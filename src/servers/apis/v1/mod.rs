//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Auth` | Credentials verification and token issuance | [`v1`](crate::servers::apis::v1::context::auth)
//! `Users` | User accounts | [`v1`](crate::servers::apis::v1::context::user)
//! `Places` | Places listed by users | [`v1`](crate::servers::apis::v1::context::place)
//! `Reviews` | Reviews users write about places | [`v1`](crate::servers::apis::v1::context::review)
//! `Amenities` | The catalog of amenities | [`v1`](crate::servers::apis::v1::context::amenity)
//!
//! > **NOTICE**:
//! - Read endpoints are public.
//! - Write endpoints require a bearer token, and some of them an
//!   administrator token.
//!
//! Refer to the [bearer token extractor](crate::servers::apis::v1::extractors::bearer_token)
//! for more information about the authentication process.
pub mod context;
pub mod extractors;
pub mod responses;
pub mod routes;
