use serde::{Deserialize, Serialize};

use crate::core::NewUser;

#[derive(Serialize, Deserialize, Debug)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Defaults to a regular, non-admin account.
    pub is_admin: Option<bool>,
}

impl From<RegistrationForm> for NewUser {
    fn from(registration_form: RegistrationForm) -> Self {
        Self {
            first_name: registration_form.first_name,
            last_name: registration_form.last_name,
            email: registration_form.email,
            password: registration_form.password,
            is_admin: registration_form.is_admin.unwrap_or(false),
        }
    }
}

/// Absent attributes are kept unchanged.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}
