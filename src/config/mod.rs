// Config layer - Environment-driven settings and infrastructure setup
pub mod database;
pub mod logging;
pub mod settings;

pub use logging::{init_logging, LoggingConfig};
pub use settings::DatabaseSettings;
