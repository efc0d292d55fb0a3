pub mod amenity;
pub mod auth;
pub mod review;
pub mod user;
