pub mod authentication;
pub mod context;
pub mod fixtures;
