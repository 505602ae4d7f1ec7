//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - An in-process test server over an in-memory store
//! - Authentication helpers
//! - Database fixtures for the Postgres store tests

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;

use axum_test::TestServer;
use inkpost::backend::auth::{PasswordScheme, TokenService};
use inkpost::backend::routes::create_router;
use inkpost::backend::server::AppState;
use inkpost::backend::store::MemoryStore;

/// Secret shared by the test server and the tests that decode its tokens
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server together with handles on its state
pub struct TestApp {
    pub server: TestServer,
    pub store: MemoryStore,
    pub tokens: TokenService,
}

/// Start a test server storing passwords as plain text
pub fn spawn_app() -> TestApp {
    spawn_app_with(PasswordScheme::Plaintext)
}

/// Start a test server with the given password scheme
pub fn spawn_app_with(passwords: PasswordScheme) -> TestApp {
    let store = MemoryStore::new();
    let tokens = TokenService::new(TEST_SECRET);
    let state = AppState::new(store.clone(), tokens.clone(), passwords);

    let server = TestServer::new(create_router(state)).expect("Failed to create test server");

    TestApp {
        server,
        store,
        tokens,
    }
}
