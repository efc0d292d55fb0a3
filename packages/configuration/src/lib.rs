//! Configuration data structures for the HBnB API.
//!
//! The configuration is loaded from a TOML file, optionally overridden by
//! environment variables. The whole configuration can also be injected
//! through a single environment variable containing the TOML document, which
//! is handy for containers and tests.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::panic::Location;

use thiserror::Error;

/// The whole configuration file content. It has priority over the config
/// file. Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "HBNB_CONFIG_TOML";

/// The configuration file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "HBNB_CONFIG_TOML_PATH";

pub type Configuration = v1::Configuration;
pub type HttpApi = v1::http_api::HttpApi;
pub type Auth = v1::auth::Auth;
pub type Admin = v1::admin::Admin;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// Errors that can arise when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to load the configuration from the environment variable {variable}, {location}")]
    UnableToLoadFromEnvironmentVariable {
        location: &'static Location<'static>,
        variable: String,
    },

    #[error("Failed processing the configuration, {location}: {source}")]
    Config {
        location: &'static Location<'static>,
        source: figment::Error,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(source: figment::Error) -> Self {
        Self::Config {
            location: Location::caller(),
            source,
        }
    }
}
