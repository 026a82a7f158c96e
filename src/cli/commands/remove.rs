use super::authenticate;
use crate::config::RunConfig;
use crate::core::remove::{RemoveLogic, WorklogCache};
use crate::errors::AppResult;
use crate::jira::JiraClient;
use crate::sheet;
use crate::ui::messages::{header, info, success};
use chrono::Local;

/// Find and delete the worklogs listed in the spreadsheet.
pub fn handle(cfg: &RunConfig) -> AppResult<()> {
    let data = sheet::load_rows(&cfg.file, cfg.sheet.as_deref(), cfg.window)?;
    let mut client = JiraClient::new(&cfg.jira_url, &cfg.jira_token)?;
    let user = authenticate(&mut client)?;

    header(format!(
        "Removing worklogs listed in sheet '{}' ({} rows)",
        data.sheet_name,
        data.rows.len()
    ));
    let mut cache = WorklogCache::new();
    let summary = RemoveLogic::apply(&mut client, cfg, &user, &data.rows, &Local, &mut cache)?;

    info(format!(
        "{} of {} rows matched existing worklogs ({} issues loaded, {} rows skipped).",
        summary.matched_rows, summary.records, summary.issues_loaded, summary.skipped
    ));
    let verb = if cfg.mode.is_confirm() {
        "deleted"
    } else {
        "would be deleted"
    };
    success(format!("{} worklogs {}.", summary.deleted, verb));
    Ok(())
}
