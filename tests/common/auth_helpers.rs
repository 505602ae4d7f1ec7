//! Authentication test helpers
//!
//! Provides utilities for creating users through the API.

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use super::TestApp;

/// A user created through `/api/v1/signup`
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Call signup and return the JSON body
pub async fn signup(app: &TestApp, email: &str, password: &str) -> Value {
    let response = app
        .server
        .post("/api/v1/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()
}

/// Sign up a fresh user with a unique email
pub async fn create_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let password = "test_password_123".to_string();

    let body = signup(app, &email, &password).await;
    let token = body["jwt"]
        .as_str()
        .expect("signup response carries a token")
        .to_string();
    let id = app
        .tokens
        .verify(&token)
        .expect("token issued by the server verifies")
        .id
        .parse()
        .expect("token id is a UUID");

    TestUser {
        id,
        email,
        password,
        token,
    }
}
