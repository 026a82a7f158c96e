use crate::config::{MatchScope, RunConfig};
use crate::core::normalize::normalize_or_warn;
use crate::errors::AppResult;
use crate::jira::WorklogApi;
use crate::models::{RawRow, RemoteUser, RemoteWorklog};
use crate::ui::messages::{dry_run, info};
use chrono::TimeZone;
use log::debug;
use std::collections::HashMap;
use std::io::{self, Write};

/// Worklogs fetched during one `remove` run.
///
/// Each issue is loaded at most once; the details are kept in load order so
/// matches are reported in a stable order.
#[derive(Debug, Default)]
pub struct WorklogCache {
    issues: HashMap<String, Vec<String>>,
    worklogs: Vec<RemoteWorklog>,
}

impl WorklogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_issue(&self, issue_id: &str) -> bool {
        self.issues.contains_key(issue_id)
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Ids of the cached worklogs of `issue_id`.
    pub fn worklog_ids(&self, issue_id: &str) -> Option<&[String]> {
        self.issues.get(issue_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.worklogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worklogs.is_empty()
    }

    /// Fetch the worklog list and every worklog of `issue_id`, unless the
    /// issue was already loaded in this run. Returns whether it fetched.
    pub fn ensure_loaded(&mut self, api: &mut dyn WorklogApi, issue_id: &str) -> AppResult<bool> {
        if self.contains_issue(issue_id) {
            return Ok(false);
        }

        let ids = api.worklog_ids(issue_id)?;
        debug!("These are all worklogs for issue_id={}: {:?}", issue_id, ids);

        print!("Loading {} worklogs for issue {}: ", ids.len(), issue_id);
        let _ = io::stdout().flush();
        for id in &ids {
            let worklog = api.worklog(issue_id, id)?;
            debug!("Worklog {} for issue {}: {:?}", id, issue_id, worklog);
            self.worklogs.push(worklog);
            print!(".");
            let _ = io::stdout().flush();
        }
        println!();

        self.issues.insert(issue_id.to_string(), ids);
        Ok(true)
    }

    /// Worklogs a row for `issue_id` is compared against.
    pub fn candidates<'a>(
        &'a self,
        issue_id: &'a str,
        scope: MatchScope,
    ) -> impl Iterator<Item = &'a RemoteWorklog> + 'a {
        self.worklogs
            .iter()
            .filter(move |w| scope == MatchScope::All || w.issue_id == issue_id)
    }

    /// Forget a worklog that has been dealt with.
    pub fn evict(&mut self, issue_id: &str, worklog_id: &str) {
        self.worklogs
            .retain(|w| !(w.issue_id == issue_id && w.id == worklog_id));
        if let Some(ids) = self.issues.get_mut(issue_id) {
            ids.retain(|id| id != worklog_id);
        }
    }
}

/// Outcome counters of a `remove` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSummary {
    pub records: usize,
    pub skipped: usize,
    pub issues_loaded: usize,
    /// Rows that found at least one worklog.
    pub matched_rows: usize,
    /// Worklogs deleted, or that would have been deleted in a dry run.
    pub deleted: usize,
}

/// High-level business logic for the `remove` command.
pub struct RemoveLogic;

impl RemoveLogic {
    /// For each valid row, find the worklogs of `user` with the same start
    /// and duration and delete them (or report them in a dry run).
    ///
    /// A row without a matching worklog is not an error.
    pub fn apply<Tz: TimeZone>(
        api: &mut dyn WorklogApi,
        cfg: &RunConfig,
        user: &RemoteUser,
        rows: &[RawRow],
        tz: &Tz,
        cache: &mut WorklogCache,
    ) -> AppResult<RemoveSummary> {
        let mut summary = RemoveSummary::default();

        for row in rows {
            let Some(record) = normalize_or_warn(row, tz) else {
                summary.skipped += 1;
                continue;
            };
            summary.records += 1;

            if cache.ensure_loaded(api, &record.issue_id)? {
                summary.issues_loaded += 1;
            }

            let matches: Vec<(String, String)> = cache
                .candidates(&record.issue_id, cfg.match_scope)
                .filter(|w| {
                    let hit = w.matches(&record, &user.key);
                    debug!(
                        "checking worklog (id={}, author={}, started={}, duration={}) against row {}: {}",
                        w.id,
                        w.author_key,
                        w.started_at,
                        w.duration_seconds,
                        row.number,
                        if hit { "YES" } else { "no" }
                    );
                    hit
                })
                .map(|w| (w.issue_id.clone(), w.id.clone()))
                .collect();

            if matches.is_empty() {
                debug!("No worklog matches row {} ({})", row.number, record);
                continue;
            }
            summary.matched_rows += 1;

            for (issue_id, worklog_id) in matches {
                if cfg.mode.is_confirm() {
                    info(format!(
                        "Deleting worklog {} for issue {}",
                        worklog_id, issue_id
                    ));
                    api.delete_worklog(&issue_id, &worklog_id)?;
                } else {
                    dry_run(format!(
                        "Would delete worklog {} for issue {}",
                        worklog_id, issue_id
                    ));
                }
                cache.evict(&issue_id, &worklog_id);
                summary.deleted += 1;
            }
        }

        Ok(summary)
    }
}
