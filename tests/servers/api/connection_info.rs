pub fn connection_with_invalid_token(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::authenticated(bind_address, "invalid token")
}

pub fn connection_with_no_token(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::anonymous(bind_address)
}

#[derive(Clone)]
pub struct ConnectionInfo {
    pub bind_address: String,
    pub access_token: Option<String>,
}

impl ConnectionInfo {
    pub fn authenticated(bind_address: &str, access_token: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            access_token: Some(access_token.to_string()),
        }
    }

    pub fn anonymous(bind_address: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            access_token: None,
        }
    }
}
