//! API resources for the [`auth`](crate::servers::apis::v1::context::auth)
//! API context.
use serde::{Deserialize, Serialize};

/// A resource that represents an issued access token.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AccessToken {
    /// The signed JSON Web Token.
    pub access_token: String,
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self { access_token: token }
    }
}
