use hbnb_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token, ConnectionInfo};
use crate::servers::api::v1::asserts::{assert_amenity_created, assert_missing_token, assert_token_not_valid};
use crate::servers::api::v1::client::{AmenityForm, Client};
use crate::servers::api::v1::contract::fixtures::logged_in_admin;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_a_bearer_token_header() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info)
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_amenity_created(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_invalid_token(&env.bind_address().to_string()))
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_signed_with_another_secret() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    // A token issued by a server with a different signing key.
    let foreign_env = Started::new(&configuration::ephemeral().into()).await;
    let (_admin, foreign_connection) = logged_in_admin(&foreign_env).await;

    let token = foreign_connection.access_token.unwrap();

    let response = Client::new(ConnectionInfo::authenticated(&env.bind_address().to_string(), &token))
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_token_not_valid(response).await;

    foreign_env.stop().await;
    env.stop().await;
}
