//! Wire shapes of the Jira REST API v2 worklog endpoints.

use crate::errors::{AppError, AppResult};
use crate::models::{RemoteUser, RemoteWorklog, WorklogRecord};
use crate::utils::time::{format_jira_timestamp, parse_jira_timestamp};
use serde::{Deserialize, Serialize};

/// `GET /rest/api/2/myself`, also the `author` of a worklog.
/// Jira Server/DC identifies users by `key`, Jira Cloud by `accountId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserPayload {
    pub fn identity(&self) -> Option<&str> {
        self.key.as_deref().or(self.account_id.as_deref())
    }
}

impl TryFrom<UserPayload> for RemoteUser {
    type Error = AppError;

    fn try_from(p: UserPayload) -> AppResult<Self> {
        let key = p
            .identity()
            .ok_or_else(|| AppError::Payload("user has neither 'key' nor 'accountId'".into()))?
            .to_string();
        Ok(RemoteUser {
            key,
            display_name: p.display_name,
        })
    }
}

/// Body of `POST /rest/api/2/issue/{issue}/worklog`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorklogPayload {
    pub started: String,
    pub time_spent_seconds: i64,
    pub comment: String,
}

impl From<&WorklogRecord> for NewWorklogPayload {
    fn from(r: &WorklogRecord) -> Self {
        Self {
            started: format_jira_timestamp(&r.started_at),
            time_spent_seconds: r.duration_seconds,
            comment: r.description.clone(),
        }
    }
}

/// One page of `GET /rest/api/2/issue/{issue}/worklog`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage {
    #[serde(default)]
    pub start_at: usize,
    #[serde(default)]
    pub max_results: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub worklogs: Vec<WorklogIdPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorklogIdPayload {
    pub id: String,
}

/// `GET /rest/api/2/issue/{issue}/worklog/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub id: String,
    pub author: UserPayload,
    pub started: String,
    pub time_spent_seconds: i64,
    #[serde(default)]
    pub issue_id: Option<String>,
}

impl WorklogPayload {
    /// `issue_id` is the issue the worklog was requested for; Jira's own
    /// `issueId` field is numeric and not what the sheet refers to.
    pub fn into_remote(self, issue_id: &str) -> AppResult<RemoteWorklog> {
        let author_key = self
            .author
            .identity()
            .ok_or_else(|| {
                AppError::Payload(format!("worklog {} has an author without key", self.id))
            })?
            .to_string();
        let started_at = parse_jira_timestamp(&self.started).ok_or_else(|| {
            AppError::Payload(format!(
                "worklog {} has an unparsable start time '{}'",
                self.id, self.started
            ))
        })?;

        Ok(RemoteWorklog {
            id: self.id,
            issue_id: issue_id.to_string(),
            author_key,
            started_at,
            duration_seconds: self.time_spent_seconds,
        })
    }
}
