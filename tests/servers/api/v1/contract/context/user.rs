use hbnb_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token};
use crate::servers::api::v1::asserts::{
    assert_admin_privileges_required, assert_bad_request, assert_missing_token, assert_not_found, assert_token_not_valid,
    assert_unauthorized_action, assert_user, assert_user_created, assert_user_list,
};
use crate::servers::api::v1::client::{Client, RegistrationForm, UpdateUserForm};
use crate::servers::api::v1::contract::fixtures::{invalid_entity_ids_returning_not_found, logged_in_admin, logged_in_user};
use crate::servers::api::Started;

fn sample_registration_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "secret99".to_string(),
        is_admin: None,
    }
}

#[tokio::test]
async fn should_allow_an_admin_to_register_a_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info).create_user(sample_registration_form()).await;

    let user = assert_user_created(response).await;

    assert_eq!(user.first_name, "John");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.email, "john@example.com");

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_regular_user_to_register_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info).create_user(sample_registration_form()).await;

    assert_admin_privileges_required(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_registering_users_for_unauthenticated_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_invalid_token(&env.bind_address().to_string()))
        .create_user(sample_registration_form())
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .create_user(sample_registration_form())
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_registering_a_user_with_an_email_that_is_already_registered() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let api_client = Client::new(connection_info);

    let response = api_client.create_user(sample_registration_form()).await;
    assert_user_created(response).await;

    let response = api_client.create_user(sample_registration_form()).await;
    assert_bad_request(response, "Email already registered").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_the_list_of_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_users()
        .await;

    let users = assert_user_list(response).await;

    // The seeded administrator account plus the registered user.
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|resource| resource.id == user.id.to_string()));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_a_user_by_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_user(&user.id.to_string())
        .await;

    let resource = assert_user(response).await;

    assert_eq!(resource.id, user.id.to_string());
    assert_eq!(resource.email, "alice@example.com");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_user_when_the_user_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_user("5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d")
        .await;

    assert_not_found(response, "User not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_user_when_the_provided_id_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    for invalid_id in &invalid_entity_ids_returning_not_found() {
        let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
            .get_user(invalid_id)
            .await;

        assert_not_found(response, "User not found").await;
    }

    env.stop().await;
}

#[tokio::test]
async fn should_allow_a_user_to_update_their_own_profile() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info)
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                first_name: Some("Alicia".to_string()),
                ..Default::default()
            },
        )
        .await;

    let resource = assert_user(response).await;

    assert_eq!(resource.first_name, "Alicia");
    assert_eq!(resource.last_name, user.last_name);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_user_to_update_another_users_profile() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (other_user, _other_connection) = logged_in_user(&env, "bob@example.com").await;
    let (_user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info)
        .update_user(
            &other_user.id.to_string(),
            UpdateUserForm {
                first_name: Some("Mallory".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_unauthorized_action(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_updating_the_email_or_the_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let api_client = Client::new(connection_info);

    let response = api_client
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                email: Some("alice@elsewhere.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_bad_request(response, "You cannot modify email or password").await;

    let response = api_client
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                password: Some("newsecret".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_bad_request(response, "You cannot modify email or password").await;

    env.stop().await;
}

#[tokio::test]
async fn should_ignore_the_admin_flag_when_a_regular_user_updates_their_profile() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info)
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                first_name: Some("Alicia".to_string()),
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert_user(response).await;

    let updated_user = env.hbnb.get_user(&user.id).await.unwrap();

    assert!(!updated_user.is_admin);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_an_admin_to_update_any_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _user_connection) = logged_in_user(&env, "alice@example.com").await;
    let (_admin, admin_connection) = logged_in_admin(&env).await;

    let response = Client::new(admin_connection)
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                last_name: Some("Smith".to_string()),
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await;

    let resource = assert_user(response).await;

    assert_eq!(resource.last_name, "Smith");

    let updated_user = env.hbnb.get_user(&user.id).await.unwrap();

    assert!(updated_user.is_admin);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_updating_a_user_when_the_user_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info)
        .update_user(
            "5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d",
            UpdateUserForm {
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_not_found(response, "User not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_updating_users_for_unauthenticated_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (user, _connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_with_invalid_token(&env.bind_address().to_string()))
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                first_name: Some("Alicia".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .update_user(
            &user.id.to_string(),
            UpdateUserForm {
                first_name: Some("Alicia".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}
