use std::net::SocketAddr;
use std::sync::Arc;

use futures::executor::block_on;
use hbnb::bootstrap::app::initialize_with_configuration;
use hbnb::bootstrap::jobs::make_rust_tls;
use hbnb::core::Hbnb;
use hbnb::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use hbnb_configuration::{Admin, Configuration, HttpApi};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub admin: Admin,
    pub hbnb: Arc<Hbnb>,
    pub server: ApiServer<S>,
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let hbnb = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config
            .bind_address
            .parse::<SocketAddr>()
            .expect("API bind_address invalid.");

        let tls = block_on(make_rust_tls(config.ssl_enabled, &config.ssl_cert_path, &config.ssl_key_path))
            .map(|tls| tls.expect("tls config failed"));

        let server = ApiServer::new(Launcher::new(bind_to, tls));

        Self {
            config,
            admin: configuration.admin.clone(),
            hbnb,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        self.hbnb
            .ensure_admin_account()
            .await
            .expect("the administrator account should be seeded");

        Environment {
            config: self.config,
            admin: self.admin,
            hbnb: self.hbnb.clone(),
            server: self.server.start(self.hbnb).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            admin: self.admin,
            hbnb: self.hbnb,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
