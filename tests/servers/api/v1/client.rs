use reqwest::Response;
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    pub async fn login(&self, login_form: LoginForm) -> Response {
        self.post_form("auth/login", &login_form).await
    }

    pub async fn create_user(&self, registration_form: RegistrationForm) -> Response {
        self.post_form("users", &registration_form).await
    }

    pub async fn get_users(&self) -> Response {
        self.get("users").await
    }

    pub async fn get_user(&self, user_id: &str) -> Response {
        self.get(&format!("users/{}", &user_id)).await
    }

    pub async fn update_user(&self, user_id: &str, update_user_form: UpdateUserForm) -> Response {
        self.put_form(&format!("users/{}", &user_id), &update_user_form).await
    }

    pub async fn create_amenity(&self, amenity_form: AmenityForm) -> Response {
        self.post_form("amenities", &amenity_form).await
    }

    pub async fn get_amenities(&self) -> Response {
        self.get("amenities").await
    }

    pub async fn get_amenity(&self, amenity_id: &str) -> Response {
        self.get(&format!("amenities/{}", &amenity_id)).await
    }

    pub async fn update_amenity(&self, amenity_id: &str, amenity_form: AmenityForm) -> Response {
        self.put_form(&format!("amenities/{}", &amenity_id), &amenity_form).await
    }

    pub async fn create_place(&self, add_place_form: AddPlaceForm) -> Response {
        self.post_form("places", &add_place_form).await
    }

    pub async fn get_places(&self) -> Response {
        self.get("places").await
    }

    pub async fn get_place(&self, place_id: &str) -> Response {
        self.get(&format!("places/{}", &place_id)).await
    }

    pub async fn update_place(&self, place_id: &str, update_place_form: UpdatePlaceForm) -> Response {
        self.put_form(&format!("places/{}", &place_id), &update_place_form).await
    }

    pub async fn get_place_reviews(&self, place_id: &str) -> Response {
        self.get(&format!("places/{}/reviews", &place_id)).await
    }

    pub async fn create_review(&self, add_review_form: AddReviewForm) -> Response {
        self.post_form("reviews", &add_review_form).await
    }

    pub async fn get_reviews(&self) -> Response {
        self.get("reviews").await
    }

    pub async fn get_review(&self, review_id: &str) -> Response {
        self.get(&format!("reviews/{}", &review_id)).await
    }

    pub async fn update_review(&self, review_id: &str, update_review_form: UpdateReviewForm) -> Response {
        self.put_form(&format!("reviews/{}", &review_id), &update_review_form).await
    }

    pub async fn delete_review(&self, review_id: &str) -> Response {
        self.delete(&format!("reviews/{}", &review_id)).await
    }

    /// The health check endpoint is mounted outside the versioned path.
    pub async fn health_check(&self) -> Response {
        reqwest::Client::new()
            .get(format!("http://{}/api/health_check", &self.connection_info.bind_address))
            .send()
            .await
            .unwrap()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.authenticated(reqwest::Client::new().get(self.base_url(path)))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.authenticated(reqwest::Client::new().post(self.base_url(path)))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn put_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.authenticated(reqwest::Client::new().put(self.base_url(path)))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        self.authenticated(reqwest::Client::new().delete(self.base_url(path)))
            .send()
            .await
            .unwrap()
    }

    fn authenticated(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.connection_info.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

#[derive(Serialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Serialize, Debug, Default)]
pub struct UpdateUserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Serialize, Debug)]
pub struct AmenityForm {
    pub name: String,
}

#[derive(Serialize, Debug)]
pub struct AddPlaceForm {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

#[derive(Serialize, Debug, Default)]
pub struct UpdatePlaceForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

#[derive(Serialize, Debug)]
pub struct AddReviewForm {
    pub text: String,
    pub rating: i64,
    pub place_id: String,
}

#[derive(Serialize, Debug, Default)]
pub struct UpdateReviewForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}
