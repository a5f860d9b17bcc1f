// Database entities - SeaORM models
pub mod login_log;
pub mod user;
