use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Migration failed: {source}")]
    Migration {
        #[source]
        source: sea_orm::DbErr,
    },
}
