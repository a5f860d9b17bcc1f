use login_tracker::config::{database, DatabaseSettings};

#[tokio::test]
async fn test_connect_and_migrate_in_memory() {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
    };

    let db = database::connect(&settings).await.expect("connect failed");
    database::migrate(&db).await.expect("migrate failed");
}

#[test]
fn test_database_settings_fall_back_to_sqlite() {
    let settings = DatabaseSettings::from_env();

    assert!(!settings.url.is_empty());
}
