//! Helpers for the HBnB API tests.
pub mod configuration;
pub mod random;
