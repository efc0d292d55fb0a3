use serde::{Deserialize, Serialize};

/// Configuration for password hashing and access tokens.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Auth {
    /// The secret used to sign access tokens. When left empty the server
    /// generates a random secret at startup, which means all tokens are
    /// invalidated on restart.
    #[serde(default = "Auth::default_secret_key")]
    pub secret_key: String,
    /// Number of seconds an access token remains valid after being issued.
    #[serde(default = "Auth::default_token_lifetime")]
    pub token_lifetime: u64,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            secret_key: Self::default_secret_key(),
            token_lifetime: Self::default_token_lifetime(),
        }
    }
}

impl Auth {
    fn default_secret_key() -> String {
        String::from("MySecretKey")
    }

    fn default_token_lifetime() -> u64 {
        3600
    }

    pub fn override_secret_key(&mut self, secret_key: &str) {
        self.secret_key = secret_key.to_string();
    }
}
