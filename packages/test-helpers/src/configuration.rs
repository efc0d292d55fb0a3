use std::env;

use hbnb_configuration::Configuration;
use hbnb_primitives::DatabaseDriver;

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one instance at the same time.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration {
        log_level: Some("off".to_owned()), // Change to `debug` for tests debugging
        ..Default::default()
    };

    // Ephemeral socket address for the API
    let api_port = 0u16;
    config.http_api.enabled = true;
    config.http_api.bind_address = format!("127.0.0.1:{}", &api_port);

    // Random token secret so tokens from parallel test instances do not
    // verify against each other
    config.auth.override_secret_key(&random::string(32));

    // Ephemeral sqlite database
    config.db_driver = DatabaseDriver::Sqlite3;
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("data_{random_db_id}.db"));
    config.db_path = temp_file.to_str().unwrap().to_owned();

    config
}
