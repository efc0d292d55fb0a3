//! HBnB application bootstrapping.
//!
//! This module includes all the functions to build the application, its dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. The only job, for the time being, is the
//! [HTTP API](crate::servers::apis) server, which can be enabled or disabled depending
//! on the configuration.
pub mod app;
pub mod jobs;
pub mod logging;
