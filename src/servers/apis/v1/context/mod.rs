//! API is organized in resource groups called contexts.
//!
//! Each context is a module that contains the API endpoints related to a
//! specific resource group.
pub mod amenity;
pub mod auth;
pub mod health_check;
pub mod place;
pub mod review;
pub mod user;
