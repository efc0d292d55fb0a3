//! HBnB application.
//!
//! The application has a global configuration for multiple jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for:
//!
//! - Seeding the administrator account in the database when it's needed.
//! - Starting some jobs depending on the configuration.
//!
//! Jobs:
//!
//! - HBnB REST API: the API can be enabled/disabled.
use std::sync::Arc;

use hbnb_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::http_api;
use crate::core::Hbnb;
use crate::servers;

/// # Panics
///
/// Will panic if it can't seed the administrator account in the database.
pub async fn start(config: &Configuration, hbnb: Arc<Hbnb>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Seed the administrator account
    hbnb.ensure_admin_account()
        .await
        .expect("Could not seed the administrator account.");

    // Start the HTTP API
    if config.http_api.enabled {
        if let Some(job) = http_api::start_job(&config.http_api, hbnb.clone(), servers::apis::Version::V1).await {
            jobs.push(job);
        };
    }

    jobs
}
