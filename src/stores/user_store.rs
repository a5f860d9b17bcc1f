use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::UserError;
use crate::errors::InternalError;
use crate::types::db::user;

/// Repository for the user rows that login log entries reference
///
/// The login flow itself lives in the host application; this store only
/// covers what the audit trail needs from the users table.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a user row and return it
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the insert fails, e.g. on a duplicate
    /// username
    pub async fn create(&self, username: &str) -> Result<user::Model, InternalError> {
        let new_user = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(username.to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_user", e))
    }

    /// Look up a user by username
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` when no such user exists
    pub async fn find_by_username(&self, username: &str) -> Result<user::Model, InternalError> {
        let found = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))?;

        found.ok_or_else(|| InternalError::User(UserError::NotFound(username.to_string())))
    }
}
