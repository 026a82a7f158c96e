use crate::config::RunConfig;
use crate::core::normalize::normalize_or_warn;
use crate::errors::AppResult;
use crate::jira::WorklogApi;
use crate::models::RawRow;
use crate::ui::messages::{dry_run, info};
use chrono::TimeZone;

/// Outcome counters of a `create` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CreateSummary {
    pub records: usize,
    pub skipped: usize,
    /// Worklogs created, or that would have been created in a dry run.
    pub created: usize,
}

/// High-level business logic for the `create` command.
pub struct CreateLogic;

impl CreateLogic {
    /// Create one worklog per valid row, in sheet order.
    ///
    /// Nothing guards against creating the same worklog twice: running the
    /// same sheet again duplicates every entry.
    pub fn apply<Tz: TimeZone>(
        api: &mut dyn WorklogApi,
        cfg: &RunConfig,
        rows: &[RawRow],
        tz: &Tz,
    ) -> AppResult<CreateSummary> {
        let mut summary = CreateSummary::default();

        for row in rows {
            let Some(record) = normalize_or_warn(row, tz) else {
                summary.skipped += 1;
                continue;
            };
            summary.records += 1;

            if cfg.mode.is_confirm() {
                info(format!(
                    "Adding worklog ({}) for issue {}",
                    record, record.issue_id
                ));
                api.add_worklog(&record)?;
            } else {
                dry_run(format!(
                    "Would add worklog ({}) for issue {}",
                    record, record.issue_id
                ));
            }
            summary.created += 1;
        }

        Ok(summary)
    }
}
