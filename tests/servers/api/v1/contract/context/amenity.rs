use hbnb_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token};
use crate::servers::api::v1::asserts::{
    assert_admin_privileges_required, assert_amenity, assert_amenity_created, assert_amenity_list, assert_bad_request,
    assert_missing_token, assert_not_found, assert_token_not_valid,
};
use crate::servers::api::v1::client::{AmenityForm, Client};
use crate::servers::api::v1::contract::fixtures::{logged_in_admin, logged_in_user};
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_an_admin_to_add_an_amenity() {
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

    let amenity = assert_amenity_created(response).await;

    assert_eq!(amenity.name, "Wi-Fi");

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_regular_user_to_add_amenities() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info)
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_admin_privileges_required(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_adding_amenities_for_unauthenticated_users() {
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

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_adding_an_amenity_with_a_name_that_already_exists() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let api_client = Client::new(connection_info);

    let response = api_client
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;
    assert_amenity_created(response).await;

    let response = api_client
        .create_amenity(AmenityForm {
            name: "Wi-Fi".to_string(),
        })
        .await;
    assert_bad_request(response, "Amenity name already exists").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_the_list_of_amenities() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let wifi = env.hbnb.register_amenity("Wi-Fi").await.unwrap();
    let parking = env.hbnb.register_amenity("Parking").await.unwrap();

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_amenities()
        .await;

    let amenities = assert_amenity_list(response).await;

    assert_eq!(amenities.len(), 2);
    assert!(amenities.iter().any(|resource| resource.id == wifi.id.to_string()));
    assert!(amenities.iter().any(|resource| resource.id == parking.id.to_string()));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_an_amenity_by_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let wifi = env.hbnb.register_amenity("Wi-Fi").await.unwrap();

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_amenity(&wifi.id.to_string())
        .await;

    let resource = assert_amenity(response).await;

    assert_eq!(resource.id, wifi.id.to_string());
    assert_eq!(resource.name, "Wi-Fi");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_an_amenity_when_the_amenity_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_amenity("5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d")
        .await;

    assert_not_found(response, "Amenity not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_an_admin_to_rename_an_amenity() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let wifi = env.hbnb.register_amenity("Wi-Fi").await.unwrap();

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info)
        .update_amenity(
            &wifi.id.to_string(),
            AmenityForm {
                name: "Wireless internet".to_string(),
            },
        )
        .await;

    let resource = assert_amenity(response).await;

    assert_eq!(resource.name, "Wireless internet");

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_regular_user_to_rename_amenities() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let wifi = env.hbnb.register_amenity("Wi-Fi").await.unwrap();

    let (_user, connection_info) = logged_in_user(&env, "alice@example.com").await;

    let response = Client::new(connection_info)
        .update_amenity(
            &wifi.id.to_string(),
            AmenityForm {
                name: "Wireless internet".to_string(),
            },
        )
        .await;

    assert_admin_privileges_required(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_renaming_an_amenity_to_a_name_that_already_exists() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let wifi = env.hbnb.register_amenity("Wi-Fi").await.unwrap();
    let _parking = env.hbnb.register_amenity("Parking").await.unwrap();

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info)
        .update_amenity(
            &wifi.id.to_string(),
            AmenityForm {
                name: "Parking".to_string(),
            },
        )
        .await;

    assert_bad_request(response, "Amenity name already exists").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_renaming_an_amenity_when_the_amenity_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, connection_info) = logged_in_admin(&env).await;

    let response = Client::new(connection_info)
        .update_amenity(
            "5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d",
            AmenityForm {
                name: "Wireless internet".to_string(),
            },
        )
        .await;

    assert_not_found(response, "Amenity not found").await;

    env.stop().await;
}
