#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use wlsync::config::{MatchScope, Mode, RowWindow, RunConfig};
use wlsync::errors::{AppError, AppResult};
use wlsync::jira::WorklogApi;
use wlsync::models::{CellValue, RawRow, RemoteUser, RemoteWorklog, WorklogRecord};

pub fn wls() -> Command {
    cargo_bin_cmd!("wlsync")
}

/// Create a unique file path inside the system temp dir and remove any existing file
pub fn temp_file(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wlsync.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path
pub fn write_temp(name: &str, ext: &str, content: &str) -> PathBuf {
    let path = temp_file(name, ext);
    fs::write(&path, content).expect("write temp file");
    path
}

/// A row made of text cells, the way a csv sheet delivers it
pub fn text_row(number: usize, cells: &[&str]) -> RawRow {
    RawRow::new(
        number,
        cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(c.to_string())
                }
            })
            .collect(),
    )
}

pub fn run_config(mode: Mode) -> RunConfig {
    RunConfig {
        mode,
        debug: false,
        file: PathBuf::from("worklogs.xlsx"),
        sheet: None,
        window: RowWindow::default(),
        jira_url: "https://jira.example.com".to_string(),
        jira_token: "secret".to_string(),
        match_scope: MatchScope::All,
    }
}

pub fn remote(
    issue_id: &str,
    id: &str,
    author: &str,
    started: &str,
    duration_seconds: i64,
) -> RemoteWorklog {
    RemoteWorklog {
        id: id.to_string(),
        issue_id: issue_id.to_string(),
        author_key: author.to_string(),
        started_at: chrono::DateTime::parse_from_rfc3339(started).expect("valid rfc3339"),
        duration_seconds,
    }
}

/// In-memory Jira that records every call it receives
#[derive(Default)]
pub struct FakeApi {
    pub user_key: String,
    pub issues: HashMap<String, Vec<RemoteWorklog>>,
    pub added: Vec<WorklogRecord>,
    pub deleted: Vec<(String, String)>,
    pub list_calls: HashMap<String, usize>,
    pub detail_calls: HashMap<String, usize>,
}

impl FakeApi {
    pub fn new(user_key: &str) -> Self {
        Self {
            user_key: user_key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_worklog(mut self, worklog: RemoteWorklog) -> Self {
        self.issues
            .entry(worklog.issue_id.clone())
            .or_default()
            .push(worklog);
        self
    }

    pub fn user(&self) -> RemoteUser {
        RemoteUser {
            key: self.user_key.clone(),
            display_name: None,
        }
    }

    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.values().sum()
    }

    pub fn mutations(&self) -> usize {
        self.added.len() + self.deleted.len()
    }
}

impl WorklogApi for FakeApi {
    fn current_user(&mut self) -> AppResult<RemoteUser> {
        Ok(self.user())
    }

    fn add_worklog(&mut self, record: &WorklogRecord) -> AppResult<()> {
        self.added.push(record.clone());
        Ok(())
    }

    fn worklog_ids(&mut self, issue_id: &str) -> AppResult<Vec<String>> {
        *self.list_calls.entry(issue_id.to_string()).or_default() += 1;
        Ok(self
            .issues
            .get(issue_id)
            .map(|ws| ws.iter().map(|w| w.id.clone()).collect())
            .unwrap_or_default())
    }

    fn worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<RemoteWorklog> {
        *self.detail_calls.entry(issue_id.to_string()).or_default() += 1;
        self.issues
            .get(issue_id)
            .and_then(|ws| ws.iter().find(|w| w.id == worklog_id))
            .cloned()
            .ok_or_else(|| AppError::Api {
                status: 404,
                body: format!("worklog {} not found", worklog_id),
            })
    }

    fn delete_worklog(&mut self, issue_id: &str, worklog_id: &str) -> AppResult<()> {
        let ws = self.issues.get_mut(issue_id).ok_or_else(|| AppError::Api {
            status: 404,
            body: format!("issue {} not found", issue_id),
        })?;
        let before = ws.len();
        ws.retain(|w| w.id != worklog_id);
        if ws.len() == before {
            return Err(AppError::Api {
                status: 404,
                body: format!("worklog {} not found", worklog_id),
            });
        }
        self.deleted
            .push((issue_id.to_string(), worklog_id.to_string()));
        Ok(())
    }
}
