use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::login_log;
use crate::types::internal::login::NewLoginLog;

/// Repository for login log storage operations
///
/// Insert-only from the caller's perspective: rows are never updated or
/// deleted here. Retrieval always orders by login_time descending.
pub struct LoginLogStore {
    db: DatabaseConnection,
}

impl LoginLogStore {
    /// Create a new LoginLogStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write a login log entry to the database
    ///
    /// Serializes the login time to RFC 3339 and inserts one row into the
    /// login_logs table. The id is assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the database insert fails
    pub async fn insert(&self, record: NewLoginLog) -> Result<login_log::Model, InternalError> {
        let entry = login_log::ActiveModel {
            id: sea_orm::ActiveValue::NotSet, // Let auto-increment handle this
            user_id: Set(record.user_id),
            ip_address: Set(record.ip_address),
            user_agent: Set(record.user_agent),
            login_time: Set(record.login_time.to_rfc3339()),
        };

        entry
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_login_log", e))
    }

    /// Fetch the most recent login log entries, newest first
    pub async fn recent(&self, limit: u64) -> Result<Vec<login_log::Model>, InternalError> {
        login_log::Entity::find()
            .order_by_desc(login_log::Column::LoginTime)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_login_logs", e))
    }

    /// Fetch the most recent login log entries for one user, newest first
    pub async fn for_user(
        &self,
        user_id: &str,
        limit: u64,
    ) -> Result<Vec<login_log::Model>, InternalError> {
        login_log::Entity::find()
            .filter(login_log::Column::UserId.eq(user_id))
            .order_by_desc(login_log::Column::LoginTime)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_user_login_logs", e))
    }
}
