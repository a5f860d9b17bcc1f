use chrono::{DateTime, Utc};

/// A login event captured from a request, not yet persisted
///
/// The recorder fills this from the request context; the store turns it
/// into a login_logs row. `login_time` is captured when the recording
/// operation starts, not when the row is written.
#[derive(Debug, Clone)]
pub struct NewLoginLog {
    pub user_id: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub login_time: DateTime<Utc>,
}
