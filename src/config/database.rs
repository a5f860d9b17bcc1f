use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::DatabaseSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connect to the tracker database
///
/// Does NOT run migrations - call `migrate()` separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(settings.url.as_str())
        .await
        .map_err(|source| DatabaseError::Connect {
            url: settings.url.clone(),
            source,
        })?;

    tracing::info!("Connected to database: {}", settings.url);

    Ok(db)
}

/// Bring the schema up to date
pub async fn migrate(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::info!("Database migrations complete");

    Ok(())
}
