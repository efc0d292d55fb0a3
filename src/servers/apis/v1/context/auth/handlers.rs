//! API handlers for the [`auth`](crate::servers::apis::v1::context::auth)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Json;

use super::forms::LoginForm;
use super::resources::AccessToken;
use super::responses::access_token_response;
use crate::core::Hbnb;
use crate::servers::apis::v1::responses::error_response;

/// It handles the request to log a user in.
///
/// It returns:
///
/// - `200` with an [`AccessToken`] resource if the credentials are valid.
/// - `401` if the email is unknown or the password is wrong.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth#login)
/// for more information about this endpoint.
pub async fn login_handler(State(hbnb): State<Arc<Hbnb>>, Json(login_form): Json<LoginForm>) -> Response {
    match hbnb.authenticate(&login_form.email, &login_form.password).await {
        Ok(user) => match hbnb.issue_token_for(&user) {
            Ok(token) => access_token_response(&AccessToken::from(token)),
            Err(error) => error_response(&error),
        },
        Err(error) => error_response(&error),
    }
}
