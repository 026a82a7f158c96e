use super::worklog::WorklogRecord;
use chrono::{DateTime, FixedOffset, Offset};

/// The authenticated Jira user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    pub key: String,
    pub display_name: Option<String>,
}

/// Read-only view of a worklog that already exists in Jira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteWorklog {
    pub id: String,
    /// Issue the worklog was fetched for; deletions are addressed to it.
    pub issue_id: String,
    pub author_key: String,
    pub started_at: DateTime<FixedOffset>,
    pub duration_seconds: i64,
}

impl RemoteWorklog {
    /// A worklog matches a row when it was written by `user_key`, starts at
    /// the same instant with the same UTC offset, and lasts as long.
    pub fn matches(&self, record: &WorklogRecord, user_key: &str) -> bool {
        self.author_key == user_key
            && self.started_at == record.started_at
            && self.started_at.offset().fix() == record.started_at.offset().fix()
            && self.duration_seconds == record.duration_seconds
    }
}
