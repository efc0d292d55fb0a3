use hbnb::servers::apis::v1::context::amenity::resources::Amenity;
use hbnb::servers::apis::v1::context::auth::resources::AccessToken;
use hbnb::servers::apis::v1::context::place::resources::{ListItem, Place, PlaceDetails};
use hbnb::servers::apis::v1::context::review::resources::Review;
use hbnb::servers::apis::v1::context::user::resources::User;
use reqwest::Response;

// Resource responses

pub async fn assert_access_token(response: Response) -> AccessToken {
    json_resource(response, 200).await
}

pub async fn assert_user(response: Response) -> User {
    json_resource(response, 200).await
}

pub async fn assert_user_created(response: Response) -> User {
    json_resource(response, 201).await
}

pub async fn assert_user_list(response: Response) -> Vec<User> {
    json_list(response).await
}

pub async fn assert_amenity(response: Response) -> Amenity {
    json_resource(response, 200).await
}

pub async fn assert_amenity_created(response: Response) -> Amenity {
    json_resource(response, 201).await
}

pub async fn assert_amenity_list(response: Response) -> Vec<Amenity> {
    json_list(response).await
}

pub async fn assert_place(response: Response) -> Place {
    json_resource(response, 200).await
}

pub async fn assert_place_created(response: Response) -> Place {
    json_resource(response, 201).await
}

pub async fn assert_place_list(response: Response) -> Vec<ListItem> {
    json_list(response).await
}

pub async fn assert_place_details(response: Response) -> PlaceDetails {
    json_resource(response, 200).await
}

pub async fn assert_review(response: Response) -> Review {
    json_resource(response, 200).await
}

pub async fn assert_review_created(response: Response) -> Review {
    json_resource(response, 201).await
}

pub async fn assert_review_list(response: Response) -> Vec<Review> {
    json_list(response).await
}

pub async fn assert_review_deleted(response: Response) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.text().await.unwrap(),
        "{\"message\":\"Review deleted successfully\"}"
    );
}

/// Single resources are rendered with an explicit charset, lists are not.
async fn json_resource<T: serde::de::DeserializeOwned>(response: Response, status: u16) -> T {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    response.json::<T>().await.unwrap()
}

async fn json_list<T: serde::de::DeserializeOwned>(response: Response) -> Vec<T> {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Vec<T>>().await.unwrap()
}

// Error responses

pub async fn assert_invalid_credentials(response: Response) {
    assert_json_error(response, 401, "Invalid credentials").await;
}

pub async fn assert_missing_token(response: Response) {
    assert_json_error(response, 401, "Missing authentication token").await;
}

pub async fn assert_token_not_valid(response: Response) {
    assert_eq!(response.status(), 401);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );

    let reason_text = "Token is not valid";
    let response_text = response.text().await.unwrap();
    assert!(
        response_text.contains(reason_text),
        ":\n  response: `\"{response_text}\"`\n  does not contain: `\"{reason_text}\"`."
    );
}

pub async fn assert_admin_privileges_required(response: Response) {
    assert_json_error(response, 403, "Admin privileges required").await;
}

pub async fn assert_unauthorized_action(response: Response) {
    assert_json_error(response, 403, "Unauthorized action").await;
}

pub async fn assert_bad_request(response: Response, reason: &str) {
    assert_json_error(response, 400, reason).await;
}

pub async fn assert_not_found(response: Response, reason: &str) {
    assert_json_error(response, 404, reason).await;
}

async fn assert_json_error(response: Response, status: u16, reason: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), format!("{{\"error\":\"{reason}\"}}"));
}
