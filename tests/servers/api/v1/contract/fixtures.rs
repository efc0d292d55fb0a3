use hbnb::core::models::place::Place;
use hbnb::core::models::user::User;
use hbnb::core::{NewPlace, NewUser};
use hbnb_primitives::entity_id::EntityId;

use crate::servers::api::connection_info::ConnectionInfo;
use crate::servers::api::Started;

/// Logs the seeded administrator account in through the facade and returns it
/// together with an authenticated connection to the running server.
pub async fn logged_in_admin(env: &Started) -> (User, ConnectionInfo) {
    let admin = env
        .hbnb
        .authenticate(&env.admin.email, &env.admin.password)
        .await
        .expect("the seeded administrator account should authenticate");

    authenticated_connection(env, admin)
}

/// Registers a regular account through the facade and returns it together
/// with an authenticated connection to the running server.
pub async fn logged_in_user(env: &Started, email: &str) -> (User, ConnectionInfo) {
    let user = env
        .hbnb
        .register_user(&NewUser {
            first_name: "Alice".to_string(),
            last_name: "Cooper".to_string(),
            email: email.to_string(),
            password: "secret99".to_string(),
            is_admin: false,
        })
        .await
        .expect("it should register the user");

    authenticated_connection(env, user)
}

/// Registers a place owned by the given user through the facade.
pub async fn sample_place(env: &Started, owner_id: &EntityId) -> Place {
    env.hbnb
        .register_place(&NewPlace {
            title: "Cozy loft".to_string(),
            description: "A small loft near the river.".to_string(),
            price: 120.0,
            latitude: 48.8566,
            longitude: 2.3522,
            owner_id: *owner_id,
            amenity_ids: vec![],
        })
        .await
        .expect("it should register the place")
}

// When these ids are used in URL path params the endpoint responds with the
// same not found error as for an unknown entity.
pub fn invalid_entity_ids_returning_not_found() -> Vec<String> {
    ["invalid-id".to_string(), "1234".to_string()].to_vec()
}

fn authenticated_connection(env: &Started, user: User) -> (User, ConnectionInfo) {
    let token = env.hbnb.issue_token_for(&user).expect("it should issue a token");

    let connection_info = ConnectionInfo::authenticated(&env.bind_address().to_string(), &token);

    (user, connection_info)
}
