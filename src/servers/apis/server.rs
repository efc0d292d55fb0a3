//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! `ApiServer` relies on the launcher to start the actual server:
//!
//! 1. `ApiServer::start` -> spawns a new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::info;

use super::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Hbnb;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error)]
pub enum Error {
    /// The spawned server dropped the start channel before confirming it was
    /// running.
    #[error("Unable to receive the started message: {err}")]
    UnableToReceiveStartedMessage { err: tokio::sync::oneshot::error::RecvError },

    /// The running server is no longer listening for the halt message.
    #[error("Unable to send the halting message: {err}")]
    UnableToSendHaltingMessage { err: Halted },

    /// The spawned server task panicked or was cancelled.
    #[error("Unable to join the server task: {err}")]
    UnableToJoinServerTask { err: tokio::task::JoinError },
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// A API server controller.
///
/// It's responsible for:
///
/// - Starting and stopping the server.
/// - Keeping the state of the server: `running` or `stopped`.
///
/// It's a state machine. The server can be in one of two states: `Stopped` or
/// `Running`. Both states are concrete types, so you cannot call `stop` on a
/// stopped server or `start` on a running one.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in
    /// `running` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the server was dropped before reporting
    /// that it had started.
    pub async fn start(self, hbnb: Arc<Hbnb>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(hbnb, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = match rx_start.await {
            Ok(started) => started.address,
            Err(err) => return Err(Error::UnableToReceiveStartedMessage { err }),
        };

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in
    /// `stopped` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the halt message was
    /// closed or the server task could not be joined.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|err| Error::UnableToSendHaltingMessage { err })?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::UnableToJoinServerTask { err })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// It knows how to start the API server over TCP, with or without TLS.
#[derive(Constructor)]
pub struct Launcher {
    /// The address the server binds to.
    pub bind_to: SocketAddr,
    /// The TLS configuration, when the server serves HTTPS.
    pub tls: Option<RustlsConfig>,
}

impl Launcher {
    /// It starts the server binding to the launcher socket address and
    /// returns the future the server runs in.
    ///
    /// # Panics
    ///
    /// Will panic if it cannot bind to the socket address, or if it cannot
    /// send the started message back to the caller.
    fn start(&self, hbnb: Arc<Hbnb>, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> BoxFuture<'static, ()> {
        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        let app = router(hbnb);

        let running = Box::pin(async move {
            match tls {
                Some(tls) => axum_server::from_tcp_rustls(socket, tls)
                    .handle(handle)
                    .serve(app.into_make_service_with_connect_info::<std::net::SocketAddr>())
                    .await
                    .expect("Axum server crashed."),
                None => axum_server::from_tcp(socket)
                    .handle(handle)
                    .serve(app.into_make_service_with_connect_info::<std::net::SocketAddr>())
                    .await
                    .expect("Axum server crashed."),
            }
        });

        info!(target: "API", "API server started on: {protocol}://{address}");

        tx_start.send(Started { address }).expect("the API server should not be dropped");

        running
    }
}
