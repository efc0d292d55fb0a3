//! HTTP API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the REST API server.
//!
//! > **NOTICE**: that even though there is only one job, the API has
//! > different versions. API consumers can choose which version to use. The
//! > API version is part of the URL, for example:
//! > `http://localhost:5000/api/v1/places`.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function spawns a new asynchronous task, that task is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application. The main application waits until it receives
//! the message [`Started`](crate::bootstrap::jobs::Started) from the
//! "**launcher**".
//!
//! The "**launcher**" is an intermediary thread that decouples the API server
//! from the process that handles it. The API could be used independently
//! in the future. In that case it would not need to notify a parent process.
//!
//! Refer to the [`hbnb-configuration`](hbnb_configuration) crate docs for
//! the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use hbnb_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use super::make_rust_tls;
use crate::core::Hbnb;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The function starts a new concurrent task that will run the API server.
/// This task will send a message to the main application process to notify
/// that the API server was successfully started.
///
/// # Panics
///
/// It would panic if it could not send the `Started` notice, if the bind
/// address were invalid or if the TLS configuration were wrong.
pub async fn start_job(config: &HttpApi, hbnb: Arc<Hbnb>, version: Version) -> Option<JoinHandle<()>> {
    if config.enabled {
        let bind_to = config
            .bind_address
            .parse::<std::net::SocketAddr>()
            .expect("it should have a valid http api bind address");

        let tls = make_rust_tls(config.ssl_enabled, &config.ssl_cert_path, &config.ssl_key_path)
            .await
            .map(|tls| tls.expect("it should have a valid http api tls configuration"));

        match version {
            Version::V1 => Some(start_v1(bind_to, tls, hbnb.clone()).await),
        }
    } else {
        info!("Note: Not loading the HTTP API Service, Not Enabled in Configuration.");
        None
    }
}

async fn start_v1(socket: SocketAddr, tls: Option<RustlsConfig>, hbnb: Arc<Hbnb>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket, tls))
        .start(hbnb)
        .await
        .expect("it should be able to start the http api");

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
