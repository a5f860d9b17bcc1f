use std::env;

/// Connection settings for the login tracker database
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Reads `DATABASE_URL`, falling back to a local SQLite file. A .env
    /// file in the working directory is honored if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://login_tracker.db?mode=rwc".to_string());

        Self { url }
    }
}
