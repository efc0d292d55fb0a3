//! Setup for the main HBnB application.
//!
//! The [`setup`] function only builds the application and its dependencies,
//! it does not start it. Once the application is bootstrapped, the console
//! application can start the [jobs](crate::bootstrap::jobs).
use std::sync::Arc;

use hbnb_configuration::{Configuration, Info};

use crate::bootstrap;
use crate::core::services::hbnb_factory;
use crate::core::Hbnb;
use crate::shared::crypto::ephemeral_instance_keys;

/// It loads the configuration from the environment and builds the main
/// application struct.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Hbnb>) {
    let configuration = Arc::new(initialize_configuration());
    let hbnb = initialize_with_configuration(&configuration);

    (configuration, hbnb)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file
/// or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Hbnb> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(initialize_hbnb(configuration))
}

/// It initializes the application static values.
///
/// These values are accessible throughout the entire application:
///
/// - The time when the application started.
/// - An ephemeral instance random seed. This seed is used as the token
///   signing secret when the configuration does not provide one, and it
///   changes when the main application process is restarted.
pub fn initialize_static() {
    // Set the time of the application starting
    lazy_static::initialize(&hbnb_clock::static_time::TIME_AT_APP_START);

    // Initialize the Ephemeral Instance Random Seed
    lazy_static::initialize(&ephemeral_instance_keys::RANDOM_SEED);
}

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `config.toml`.
/// 2. Environment variable: `HBNB_CONFIG_TOML`. The variable contains the
///    same contents as the `config.toml` file.
///
/// The environment variable has priority over the config file.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either the
/// `./config.toml` file or the env var `HBNB_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    const CONFIG_PATH: &str = "./config.toml";

    let info = Info::new(CONFIG_PATH.to_string()).expect("Could not collect the configuration sources.");

    Configuration::load(&info).expect("Could not load the configuration.")
}

/// It builds an instance of the core [`Hbnb`] facade.
#[must_use]
pub fn initialize_hbnb(config: &Arc<Configuration>) -> Hbnb {
    hbnb_factory(config)
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info
/// about logging.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
