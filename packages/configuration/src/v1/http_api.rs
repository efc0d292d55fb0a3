use serde::{Deserialize, Serialize};

/// Configuration for the REST API server.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// Weather the REST API is enabled or not.
    #[serde(default = "HttpApi::default_enabled")]
    pub enabled: bool,
    /// The address the API will bind to.
    /// The format is `ip:port`, for example `127.0.0.1:5000`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: String,
    /// Weather the API will serve TLS or not.
    #[serde(default = "HttpApi::default_ssl_enabled")]
    pub ssl_enabled: bool,
    /// Path to the TLS certificate file. Only used if `ssl_enabled` is true.
    #[serde(default = "HttpApi::default_ssl_cert_path")]
    pub ssl_cert_path: Option<String>,
    /// Path to the TLS key file. Only used if `ssl_enabled` is true.
    #[serde(default = "HttpApi::default_ssl_key_path")]
    pub ssl_key_path: Option<String>,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            bind_address: Self::default_bind_address(),
            ssl_enabled: Self::default_ssl_enabled(),
            ssl_cert_path: Self::default_ssl_cert_path(),
            ssl_key_path: Self::default_ssl_key_path(),
        }
    }
}

impl HttpApi {
    fn default_enabled() -> bool {
        true
    }

    fn default_bind_address() -> String {
        String::from("127.0.0.1:5000")
    }

    fn default_ssl_enabled() -> bool {
        false
    }

    fn default_ssl_cert_path() -> Option<String> {
        None
    }

    fn default_ssl_key_path() -> Option<String> {
        None
    }
}
