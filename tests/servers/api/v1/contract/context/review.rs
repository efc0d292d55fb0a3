use hbnb::core::models::place::Place;
use hbnb::core::models::review::Review;
use hbnb::core::models::user::User;
use hbnb::core::NewReview;
use hbnb_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token, ConnectionInfo};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_missing_token, assert_not_found, assert_review, assert_review_created, assert_review_deleted,
    assert_review_list, assert_token_not_valid, assert_unauthorized_action,
};
use crate::servers::api::v1::client::{AddReviewForm, Client, UpdateReviewForm};
use crate::servers::api::v1::contract::fixtures::{
    invalid_entity_ids_returning_not_found, logged_in_admin, logged_in_user, sample_place,
};
use crate::servers::api::Started;

/// A place owned by one user and a second user who can review it.
async fn place_with_a_reviewer(env: &Started) -> (Place, User, ConnectionInfo) {
    let (owner, _owner_connection) = logged_in_user(env, "alice@example.com").await;
    let (reviewer, reviewer_connection) = logged_in_user(env, "bob@example.com").await;

    let place = sample_place(env, &owner.id).await;

    (place, reviewer, reviewer_connection)
}

async fn sample_review(env: &Started, reviewer: &User, place: &Place) -> Review {
    env.hbnb
        .register_review(&NewReview {
            text: "Great stay!".to_string(),
            rating: 5,
            user_id: reviewer.id,
            place_id: place.id,
        })
        .await
        .expect("it should register the review")
}

#[tokio::test]
async fn should_allow_an_authenticated_user_to_review_a_place() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, reviewer_connection) = place_with_a_reviewer(&env).await;

    let response = Client::new(reviewer_connection)
        .create_review(AddReviewForm {
            text: "Great stay!".to_string(),
            rating: 5,
            place_id: place.id.to_string(),
        })
        .await;

    let review = assert_review_created(response).await;

    assert_eq!(review.text, "Great stay!");
    assert_eq!(review.rating, 5);
    // The author is always the authenticated user.
    assert_eq!(review.user_id, reviewer.id.to_string());
    assert_eq!(review.place_id, place.id.to_string());

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_adding_reviews_for_unauthenticated_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, _reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;

    let add_review_form = || AddReviewForm {
        text: "Great stay!".to_string(),
        rating: 5,
        place_id: place.id.to_string(),
    };

    let response = Client::new(connection_with_invalid_token(&env.bind_address().to_string()))
        .create_review(add_review_form())
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .create_review(add_review_form())
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_user_to_review_their_own_place() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (owner, owner_connection) = logged_in_user(&env, "alice@example.com").await;

    let place = sample_place(&env, &owner.id).await;

    let response = Client::new(owner_connection)
        .create_review(AddReviewForm {
            text: "My own place is great!".to_string(),
            rating: 5,
            place_id: place.id.to_string(),
        })
        .await;

    assert_bad_request(response, "You cannot review your own place").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_user_to_review_the_same_place_twice() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, _reviewer, reviewer_connection) = place_with_a_reviewer(&env).await;

    let api_client = Client::new(reviewer_connection);

    let response = api_client
        .create_review(AddReviewForm {
            text: "Great stay!".to_string(),
            rating: 5,
            place_id: place.id.to_string(),
        })
        .await;
    assert_review_created(response).await;

    let response = api_client
        .create_review(AddReviewForm {
            text: "Still great!".to_string(),
            rating: 4,
            place_id: place.id.to_string(),
        })
        .await;
    assert_bad_request(response, "You have already reviewed this place").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_adding_a_review_when_the_place_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_user, connection_info) = logged_in_user(&env, "bob@example.com").await;

    let response = Client::new(connection_info)
        .create_review(AddReviewForm {
            text: "Great stay!".to_string(),
            rating: 5,
            place_id: "5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d".to_string(),
        })
        .await;

    assert_not_found(response, "Place not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_the_list_of_reviews() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_reviews()
        .await;

    let reviews = assert_review_list(response).await;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id.to_string());

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_get_a_review_by_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_review(&review.id.to_string())
        .await;

    let resource = assert_review(response).await;

    assert_eq!(resource.id, review.id.to_string());
    assert_eq!(resource.text, "Great stay!");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_review_when_the_review_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_review("5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d")
        .await;

    assert_not_found(response, "Review not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_review_when_the_provided_id_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    for invalid_id in &invalid_entity_ids_returning_not_found() {
        let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
            .get_review(invalid_id)
            .await;

        assert_not_found(response, "Review not found").await;
    }

    env.stop().await;
}

#[tokio::test]
async fn should_allow_anyone_to_list_the_reviews_of_a_place() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (owner, _owner_connection) = logged_in_user(&env, "alice@example.com").await;
    let (reviewer, _reviewer_connection) = logged_in_user(&env, "bob@example.com").await;

    let reviewed_place = sample_place(&env, &owner.id).await;
    let empty_place = sample_place(&env, &owner.id).await;

    let review = sample_review(&env, &reviewer, &reviewed_place).await;

    let anonymous_client = Client::new(connection_with_no_token(&env.bind_address().to_string()));

    let response = anonymous_client.get_place_reviews(&reviewed_place.id.to_string()).await;

    let reviews = assert_review_list(response).await;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id.to_string());

    let response = anonymous_client.get_place_reviews(&empty_place.id.to_string()).await;

    let reviews = assert_review_list(response).await;

    assert!(reviews.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_listing_the_reviews_of_a_place_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .get_place_reviews("5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d")
        .await;

    assert_not_found(response, "Place not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_the_author_to_update_their_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, reviewer_connection) = place_with_a_reviewer(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(reviewer_connection)
        .update_review(
            &review.id.to_string(),
            UpdateReviewForm {
                text: Some("Good, not great.".to_string()),
                rating: Some(3),
            },
        )
        .await;

    let resource = assert_review(response).await;

    assert_eq!(resource.text, "Good, not great.");
    assert_eq!(resource.rating, 3);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_user_to_update_another_users_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;
    let (_other_user, other_connection) = logged_in_user(&env, "carol@example.com").await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(other_connection)
        .update_review(
            &review.id.to_string(),
            UpdateReviewForm {
                text: Some("Rewritten by someone else".to_string()),
                rating: None,
            },
        )
        .await;

    assert_unauthorized_action(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_an_admin_to_update_any_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;
    let (_admin, admin_connection) = logged_in_admin(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(admin_connection)
        .update_review(
            &review.id.to_string(),
            UpdateReviewForm {
                text: Some("Moderated content".to_string()),
                rating: None,
            },
        )
        .await;

    let resource = assert_review(response).await;

    assert_eq!(resource.text, "Moderated content");
    // Untouched attributes are kept.
    assert_eq!(resource.rating, 5);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_the_author_to_delete_their_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, reviewer_connection) = place_with_a_reviewer(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let api_client = Client::new(reviewer_connection);

    let response = api_client.delete_review(&review.id.to_string()).await;

    assert_review_deleted(response).await;

    let response = api_client.get_review(&review.id.to_string()).await;

    assert_not_found(response, "Review not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_a_user_to_delete_another_users_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;
    let (_other_user, other_connection) = logged_in_user(&env, "carol@example.com").await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(other_connection).delete_review(&review.id.to_string()).await;

    assert_unauthorized_action(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_an_admin_to_delete_any_review() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;
    let (_admin, admin_connection) = logged_in_admin(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(admin_connection).delete_review(&review.id.to_string()).await;

    assert_review_deleted(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_deleting_a_review_when_the_review_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (_admin, admin_connection) = logged_in_admin(&env).await;

    let response = Client::new(admin_connection)
        .delete_review("5b0c5a96-6f9d-4673-9d9a-02e9717fbd9d")
        .await;

    assert_not_found(response, "Review not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_deleting_reviews_for_unauthenticated_users() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let (place, reviewer, _reviewer_connection) = place_with_a_reviewer(&env).await;

    let review = sample_review(&env, &reviewer, &place).await;

    let response = Client::new(connection_with_invalid_token(&env.bind_address().to_string()))
        .delete_review(&review.id.to_string())
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(connection_with_no_token(&env.bind_address().to_string()))
        .delete_review(&review.id.to_string())
        .await;

    assert_missing_token(response).await;

    env.stop().await;
}
