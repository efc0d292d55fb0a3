//! HBnB is a simplified vacation rental service, written in Rust.
//!
//! It exposes a REST API to manage users, places, amenities and the reviews
//! users write about the places they visited. Authentication uses JSON Web
//! Tokens and there are three access levels: anonymous visitors, registered
//! users and administrators.
//!
//! - [Getting started](#getting-started)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Getting started
//!
//! You can follow the [installation instructions](https://github.com/hbnb/hbnb)
//! to install the service from sources or run it with:
//!
//! ```text
//! cargo run
//! ```
//!
//! On the first run a default `config.toml` file is used. The service binds
//! to `127.0.0.1:5000` and seeds an administrator account so that you can
//! start making authenticated requests right away.
//!
//! # Configuration
//!
//! The default configuration is:
//!
//! ```toml
//! db_driver = "Sqlite3"
//! db_path = "./storage/hbnb.db"
//!
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:5000"
//! ssl_enabled = false
//!
//! [auth]
//! secret_key = "MySecretKey"
//! token_lifetime = 3600
//!
//! [admin]
//! email = "admin@hbnb.com"
//! password = "admin123"
//! ```
//!
//! Refer to the [`hbnb-configuration`](hbnb_configuration) crate docs for all
//! the options and how to override them with environment variables.
//!
//! # Usage
//!
//! Log in with the administrator account to get an access token:
//!
//! ```text
//! curl -X POST http://127.0.0.1:5000/api/v1/auth/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"email": "admin@hbnb.com", "password": "admin123"}'
//! ```
//!
//! And use the token in the `Authorization` header for the write endpoints:
//!
//! ```text
//! curl -X POST http://127.0.0.1:5000/api/v1/amenities \
//!   -H "Authorization: Bearer <ACCESS_TOKEN>" \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Wi-Fi"}'
//! ```
//!
//! Refer to the [`API module`](crate::servers::apis) documentation for the
//! full list of endpoints.
//!
//! # Components
//!
//! The main application structure is:
//!
//! - The core [`Hbnb`](crate::core::Hbnb) facade, which owns the domain rules
//!   and the repositories.
//! - The [`REST API`](crate::servers::apis) built with [`axum`].
//! - The [`bootstrap`](crate::bootstrap) module, which wires everything
//!   together on startup.
//!
//! The facade never knows where the entities are stored. Storage is hidden
//! behind the repository traits in
//! [`core::repositories`](crate::core::repositories), with one implementation
//! keeping everything in memory and another one persisting to a SQL database
//! (`SQLite3` or `MySQL`).
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
pub mod shared;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
pub(crate) type CurrentClock = hbnb_clock::clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
pub(crate) type CurrentClock = hbnb_clock::clock::Stopped;
