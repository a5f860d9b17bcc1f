use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Configuration for application logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_file = env::var("LOG_FILE").ok().map(PathBuf::from);

        Self {
            log_level,
            log_file,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional file output
///
/// Reads configuration from environment variables automatically. With
/// `LOG_FILE` set, log lines are also written to a daily-rotated file next
/// to the configured path.
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file_path) = &config.log_file {
        if let Some(parent) = log_file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file_appender = tracing_appender::rolling::daily(
            log_file_path.parent().unwrap_or_else(|| Path::new(".")),
            log_file_path
                .file_name()
                .ok_or_else(|| LoggingError::Initialization("Invalid log file path".to_string()))?,
        );

        let file_filter = EnvFilter::try_new(&config.log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_filter(file_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::Initialization(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::Initialization(e.to_string()))?;
    }

    Ok(())
}
