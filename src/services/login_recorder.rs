use std::sync::Arc;

use chrono::Utc;

use crate::errors::InternalError;
use crate::stores::LoginLogStore;
use crate::types::internal::context::RequestContext;
use crate::types::internal::login::NewLoginLog;

/// Records successful logins into the audit trail
pub struct LoginRecorder {
    login_log_store: Arc<LoginLogStore>,
}

impl LoginRecorder {
    /// Create a new LoginRecorder writing through the given store
    pub fn new(login_log_store: Arc<LoginLogStore>) -> Self {
        Self { login_log_store }
    }

    /// Record a successful login for `user_id`
    ///
    /// `ctx` is `Some` when the login happened inside an inbound HTTP
    /// request. Callers running outside one (CLI commands, background
    /// jobs) pass `None`, and no entry is written. The login time is
    /// captured here, before the insert, so the stored value reflects the
    /// start of the operation rather than the moment of the write.
    ///
    /// # Arguments
    /// * `ctx` - Request context of the login, if one exists
    /// * `user_id` - ID of the user who logged in
    ///
    /// # Errors
    ///
    /// Any failure of the underlying insert propagates as
    /// `InternalError`; nothing is retried.
    pub async fn record_login(
        &self,
        ctx: Option<&RequestContext>,
        user_id: &str,
    ) -> Result<(), InternalError> {
        let Some(ctx) = ctx else {
            tracing::debug!(user_id, "no request context, skipping login log entry");
            return Ok(());
        };

        let login_time = Utc::now();
        let record = NewLoginLog {
            user_id: user_id.to_string(),
            ip_address: ctx.ip_address.map(|ip| ip.to_string()),
            user_agent: ctx.user_agent.clone(),
            login_time,
        };

        let entry = self.login_log_store.insert(record).await?;
        tracing::info!(
            user_id,
            entry_id = entry.id,
            request_id = %ctx.request_id,
            "recorded login"
        );

        Ok(())
    }
}
