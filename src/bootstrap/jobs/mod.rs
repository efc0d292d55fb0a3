//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: the core [`Hbnb`](crate::core::Hbnb) facade.
//! 2. Launch all the application services as concurrent jobs.
//!
//! This module contains all the functions needed to start those jobs.
pub mod http_api;

use std::panic::Location;

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;
use tracing::info;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}

/// Error returned by the bootstrap process.
#[derive(Error, Debug)]
pub enum Error {
    /// Enabled tls but missing config.
    #[error("tls config missing")]
    MissingTlsConfig { location: &'static Location<'static> },

    /// Unable to parse tls Config.
    #[error("bad tls config: {source}")]
    BadTlsConfig { source: std::io::Error },
}

/// It builds the TLS configuration for the API server, when TLS is enabled.
///
/// It returns `None` when TLS is disabled, and an [`Error`] when it is
/// enabled but the certificate or the key cannot be loaded.
pub async fn make_rust_tls(enabled: bool, cert: &Option<String>, key: &Option<String>) -> Option<Result<RustlsConfig, Error>> {
    if !enabled {
        info!("tls not enabled");
        return None;
    }

    if let (Some(cert), Some(key)) = (cert, key) {
        info!("Using https: cert path: {cert}.");
        info!("Using https: key path: {key}.");

        Some(
            RustlsConfig::from_pem_file(cert, key)
                .await
                .map_err(|err| Error::BadTlsConfig { source: err }),
        )
    } else {
        Some(Err(Error::MissingTlsConfig {
            location: Location::caller(),
        }))
    }
}
