//! Test helpers for the login API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use kaplar_login::config::Config;
use kaplar_login::db::{AccountRepository, CharacterRepository, NewAccount, NewCharacter};
use kaplar_login::web::create_router;
use kaplar_login::{hash_password, AppState, Database, HashAlgorithm};

pub const EMAIL: &str = "a@x.com";
pub const PASSWORD: &str = "secret";

/// Create a test server with an in-memory database and default config.
pub async fn create_test_server() -> (TestServer, Database) {
    create_test_server_with_config(Config::default()).await
}

/// Create a test server with an in-memory database.
pub async fn create_test_server_with_config(config: Config) -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::from_config(db.clone(), &config));
    let router = create_router(app_state);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Create an account whose password is hashed with `algorithm`.
pub async fn create_account(
    db: &Database,
    algorithm: HashAlgorithm,
    email: &str,
    password: &str,
    premium_days: i64,
) -> i64 {
    let hash = hash_password(algorithm, password).expect("Failed to hash password");
    AccountRepository::new(db.pool())
        .create(&NewAccount::new(email, hash).with_premium_days(premium_days))
        .await
        .expect("Failed to create account")
        .id
}

/// Create a character for an account.
pub async fn create_character(db: &Database, character: NewCharacter) {
    CharacterRepository::new(db.pool())
        .create(&character)
        .await
        .expect("Failed to create character");
}
