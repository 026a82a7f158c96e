use crate::utils::{formatting::shorten, secs2readable, time::format_jira_timestamp};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// A worklog as described by one sheet row, ready to be sent to Jira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogRecord {
    /// Local start time, carrying the UTC offset in effect on that date.
    pub started_at: DateTime<FixedOffset>,
    pub duration_seconds: i64,
    pub issue_id: String,
    pub description: String,
}

impl fmt::Display for WorklogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "started={}, duration={} ({}s), description={:?}",
            format_jira_timestamp(&self.started_at),
            secs2readable(self.duration_seconds),
            self.duration_seconds,
            shorten(&self.description, 36)
        )
    }
}
