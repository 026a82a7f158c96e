//! Access to the Jira worklog REST API.
//!
//! The flows only see the [`WorklogApi`] trait; [`JiraClient`] is the real
//! implementation over HTTP.

pub mod client;
pub mod payload;

use crate::errors::AppResult;
use crate::models::{RemoteUser, RemoteWorklog, WorklogRecord};

pub use client::JiraClient;

/// The worklog operations the tool needs from an issue tracker.
pub trait WorklogApi {
    /// The authenticated user.
    fn current_user(&mut self) -> AppResult<RemoteUser>;

    /// Create a worklog on `record.issue_id`.
    fn add_worklog(&mut self, record: &WorklogRecord) -> AppResult<()>;

    /// Ids of every worklog attached to an issue.
    fn worklog_ids(&mut self, issue_id: &str) -> AppResult<Vec<String>>;

    /// Full detail of a single worklog.
    fn worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<RemoteWorklog>;

    fn delete_worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<()>;
}
