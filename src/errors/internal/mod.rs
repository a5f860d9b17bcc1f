use thiserror::Error;

pub mod database;
pub mod user;

pub use database::DatabaseError;
pub use user::UserError;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (shared) from domain errors
/// (store-specific). A missing request context is not an error; the only
/// failures this crate produces come from the persistence layer.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    User(#[from] UserError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
