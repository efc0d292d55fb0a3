use hbnb_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::connection_with_no_token;
use crate::servers::api::v1::asserts::{assert_access_token, assert_invalid_credentials};
use crate::servers::api::v1::client::{Client, LoginForm};
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_logging_in_with_the_seeded_administrator_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .login(LoginForm {
            email: env.admin.email.clone(),
            password: env.admin.password.clone(),
        })
        .await;

    let access_token = assert_access_token(response).await;

    assert!(!access_token.access_token.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_issue_tokens_the_server_accepts_for_protected_endpoints() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let anonymous_client = Client::new(connection_with_no_token(&env.bind_address().to_string()));

    let response = anonymous_client
        .login(LoginForm {
            email: env.admin.email.clone(),
            password: env.admin.password.clone(),
        })
        .await;

    let access_token = assert_access_token(response).await;

    let claims = env
        .hbnb
        .verify_token(&access_token.access_token)
        .expect("the issued token should pass verification");

    assert!(claims.is_admin);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_logging_in_with_a_wrong_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .login(LoginForm {
            email: env.admin.email.clone(),
            password: "wrong password".to_string(),
        })
        .await;

    assert_invalid_credentials(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_logging_in_with_an_unregistered_email() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .login(LoginForm {
            email: "nobody@example.com".to_string(),
            password: "irrelevant".to_string(),
        })
        .await;

    assert_invalid_credentials(response).await;

    env.stop().await;
}
