//! Authentication API integration tests
//!
//! Tests for `/api/v1/signup`, `/api/v1/signin` and `/api/v1/profile`.

mod common;

use axum::http::StatusCode;
use inkpost::backend::auth::PasswordScheme;
use inkpost::backend::store::UserStore;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{create_test_user, signup, spawn_app, spawn_app_with};

#[tokio::test]
async fn test_signup_success() {
    let app = spawn_app();

    let body = signup(&app, "a@x.com", "p").await;

    assert_eq!(body["userAlreadyExists"], json!(false));
    let token = body["jwt"].as_str().unwrap();

    let user = app.store.find_user_by_email("a@x.com").await.unwrap().unwrap();
    let claims = app.tokens.verify(token).unwrap();
    assert_eq!(claims.id, user.id.to_string());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = spawn_app();

    signup(&app, "a@x.com", "p").await;
    let second = signup(&app, "a@x.com", "p").await;

    assert_eq!(second, json!({ "userAlreadyExists": true }));
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn test_signup_malformed_body() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/v1/signup")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal Error in Signup Route", "status": 500 })
    );
    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_signin_success() {
    let app = spawn_app();
    let user = create_test_user(&app).await;

    let response = app
        .server
        .post("/api/v1/signin")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["userAlreadyExists"], json!(true));

    let claims = app.tokens.verify(body["jwt"].as_str().unwrap()).unwrap();
    assert_eq!(claims.id, user.id.to_string());
}

#[tokio::test]
async fn test_signin_invalid_credentials() {
    let app = spawn_app();
    let user = create_test_user(&app).await;

    let wrong_password = app
        .server
        .post("/api/v1/signin")
        .json(&json!({ "email": user.email, "password": "wrongpassword" }))
        .await;
    assert_eq!(wrong_password.status_code(), StatusCode::OK);
    assert_eq!(
        wrong_password.json::<Value>(),
        json!({ "userAlreadyExists": false })
    );

    let unknown_email = app
        .server
        .post("/api/v1/signin")
        .json(&json!({ "email": "nobody@example.com", "password": user.password }))
        .await;
    assert_eq!(unknown_email.status_code(), StatusCode::OK);
    assert_eq!(
        unknown_email.json::<Value>(),
        json!({ "userAlreadyExists": false })
    );
}

#[tokio::test]
async fn test_signin_malformed_body() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/v1/signin")
        .text("not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        json!("Internal Error in Signin Route")
    );
}

#[tokio::test]
async fn test_bcrypt_scheme_round_trip() {
    let app = spawn_app_with(PasswordScheme::Bcrypt { cost: 4 });
    let user = create_test_user(&app).await;

    let stored = app
        .store
        .find_user_by_email(&user.email)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password, user.password);

    let response = app
        .server
        .post("/api/v1/signin")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(response.json::<Value>()["userAlreadyExists"], json!(true));
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = spawn_app();

    let response = app.server.put("/api/v1/profile").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Unauthorized", "status": 401 })
    );
}

#[tokio::test]
async fn test_profile_with_token() {
    let app = spawn_app();
    let user = create_test_user(&app).await;

    let response = app
        .server
        .put("/api/v1/profile")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Value>()["msg"].is_string());
}
