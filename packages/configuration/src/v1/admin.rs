use serde::{Deserialize, Serialize};

/// The administrator account seeded at startup.
///
/// Creating users requires admin privileges, so a fresh deployment needs at
/// least one admin account to bootstrap from. The server creates this account
/// the first time it starts against an empty database; existing accounts are
/// never overwritten.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Admin {
    /// Email of the seeded administrator account.
    #[serde(default = "Admin::default_email")]
    pub email: String,
    /// Password of the seeded administrator account. Change it in production.
    #[serde(default = "Admin::default_password")]
    pub password: String,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            email: Self::default_email(),
            password: Self::default_password(),
        }
    }
}

impl Admin {
    fn default_email() -> String {
        String::from("admin@hbnb.com")
    }

    fn default_password() -> String {
        String::from("admin123")
    }
}
