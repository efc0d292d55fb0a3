//! API handlers for the [`user`](crate::servers::apis::v1::context::user)
//! API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hbnb_primitives::entity_id::EntityId;
use hbnb_primitives::pagination::Pagination;
use tracing::debug;

use super::forms::{RegistrationForm, UpdateForm};
use super::resources::User;
use super::responses::{user_created_response, user_list_response, user_response};
use crate::core::error::Error;
use crate::core::{Hbnb, UserUpdate};
use crate::servers::apis::v1::extractors::bearer_token::Extract;
use crate::servers::apis::v1::responses::{bad_request_response, error_response, forbidden_response};
use crate::servers::apis::{EntityIdParam, PaginationParams};

/// It handles the request to create a new user account.
///
/// Only administrators can create accounts.
///
/// It returns:
///
/// - `201` with the created [`User`] resource.
/// - `403` if the token does not belong to an administrator.
/// - `400` if the attributes are invalid or the email is taken.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::user#create-a-user)
/// for more information about this endpoint.
pub async fn create_user_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Json(registration_form): Json<RegistrationForm>,
) -> Response {
    if !claims.is_admin {
        return forbidden_response("Admin privileges required");
    }

    match hbnb.register_user(&registration_form.into()).await {
        Ok(user) => user_created_response(&User::from(user)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to list the user accounts.
///
/// It returns a `200` response with a json array of [`User`] resources.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::user#list-users)
/// for more information about this endpoint.
pub async fn list_users_handler(State(hbnb): State<Arc<Hbnb>>, pagination: Query<PaginationParams>) -> Response {
    debug!("pagination: {:?}", pagination);

    let pagination = Pagination::new_with_options(pagination.0.offset, pagination.0.limit);

    match hbnb.get_users().await {
        Ok(users) => {
            let page: Vec<_> = users
                .into_iter()
                .skip(pagination.offset as usize)
                .take(pagination.limit as usize)
                .collect();

            user_list_response(&page).into_response()
        }
        Err(error) => error_response(&error),
    }
}

/// It handles the request to get one user profile.
///
/// It returns:
///
/// - `200` with the [`User`] resource.
/// - `404` if no user has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::user#get-a-user)
/// for more information about this endpoint.
pub async fn get_user_handler(State(hbnb): State<Arc<Hbnb>>, Path(user_id): Path<EntityIdParam>) -> Response {
    let user_id = match EntityId::from_str(&user_id.0) {
        Ok(user_id) => user_id,
        Err(_) => return error_response(&Error::UserNotFound),
    };

    match hbnb.get_user(&user_id).await {
        Ok(user) => user_response(&User::from(user)),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to update a user account.
///
/// Users can update their own first and last names. Only administrators can
/// update other accounts, change emails and passwords, and grant or revoke
/// the admin flag.
///
/// It returns:
///
/// - `200` with the updated [`User`] resource.
/// - `403` if a non-admin user tries to update another account.
/// - `400` if a non-admin user tries to change their email or password.
/// - `404` if no user has the requested id.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::user#update-a-user)
/// for more information about this endpoint.
pub async fn update_user_handler(
    State(hbnb): State<Arc<Hbnb>>,
    Extract(claims): Extract,
    Path(user_id): Path<EntityIdParam>,
    Json(update_form): Json<UpdateForm>,
) -> Response {
    let user_id = match EntityId::from_str(&user_id.0) {
        Ok(user_id) => user_id,
        Err(_) => return error_response(&Error::UserNotFound),
    };

    if !claims.is_admin && claims.sub != user_id {
        return forbidden_response("Unauthorized action");
    }

    if !claims.is_admin && (update_form.email.is_some() || update_form.password.is_some()) {
        return bad_request_response("You cannot modify email or password");
    }

    let update = UserUpdate {
        first_name: update_form.first_name,
        last_name: update_form.last_name,
        email: update_form.email,
        password: update_form.password,
        // Only administrators can grant or revoke administrator privileges.
        is_admin: if claims.is_admin { update_form.is_admin } else { None },
    };

    match hbnb.update_user(&user_id, &update).await {
        Ok(user) => user_response(&User::from(user)),
        Err(error) => error_response(&error),
    }
}
