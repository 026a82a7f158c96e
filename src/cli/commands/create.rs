use super::authenticate;
use crate::config::RunConfig;
use crate::core::create::CreateLogic;
use crate::errors::AppResult;
use crate::jira::JiraClient;
use crate::sheet;
use crate::ui::messages::{header, success};
use chrono::Local;

/// Create the worklogs listed in the spreadsheet.
pub fn handle(cfg: &RunConfig) -> AppResult<()> {
    let data = sheet::load_rows(&cfg.file, cfg.sheet.as_deref(), cfg.window)?;
    let mut client = JiraClient::new(&cfg.jira_url, &cfg.jira_token)?;
    authenticate(&mut client)?;

    header(format!(
        "Creating worklogs from sheet '{}' ({} rows)",
        data.sheet_name,
        data.rows.len()
    ));
    let summary = CreateLogic::apply(&mut client, cfg, &data.rows, &Local)?;

    let verb = if cfg.mode.is_confirm() {
        "created"
    } else {
        "would be created"
    };
    success(format!(
        "{} worklogs {} ({} rows skipped).",
        summary.created, verb, summary.skipped
    ));
    Ok(())
}
