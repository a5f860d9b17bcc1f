// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use login_tracker::stores::{LoginLogStore, UserStore};
use login_tracker::types::db::user;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a login log store backed by a fresh test database
#[allow(dead_code)]
pub async fn create_test_login_log_store() -> (DatabaseConnection, Arc<LoginLogStore>) {
    let db = setup_test_db().await;
    let store = Arc::new(LoginLogStore::new(db.clone()));
    (db, store)
}

/// Creates a user row to satisfy the login log foreign key
#[allow(dead_code)]
pub async fn seed_user(db: &DatabaseConnection, username: &str) -> user::Model {
    UserStore::new(db.clone())
        .create(username)
        .await
        .expect("Failed to create test user")
}
