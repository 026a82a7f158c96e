//! Row normalizer: turns a positional sheet row into a [`WorklogRecord`].

use crate::errors::RowError;
use crate::models::row::{
    COL_DATE, COL_DESCRIPTION, COL_DURATION, COL_ISSUE_ID, COL_TIME_FROM, COL_TIME_TO,
    REQUIRED_FIELDS,
};
use crate::models::{CellValue, RawRow, WorklogRecord};
use crate::ui::messages::warning;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Offset, TimeZone};
use log::{debug, warn};

fn invalid(field: &'static str, expected: &'static str, cell: &CellValue) -> RowError {
    RowError::InvalidCell {
        field,
        expected,
        value: cell.to_string(),
    }
}

/// Build the worklog described by `row`, with the start time localized in
/// `tz` using the rules in effect on that date.
///
/// `time_to` is only echoed in debug output; the duration column is
/// authoritative.
pub fn normalize<Tz: TimeZone>(row: &RawRow, tz: &Tz) -> Result<WorklogRecord, RowError> {
    if row.len() < REQUIRED_FIELDS {
        return Err(RowError::TooFewFields {
            found: row.len(),
            required: REQUIRED_FIELDS,
        });
    }

    let date_cell = row.cell(COL_DATE);
    let from_cell = row.cell(COL_TIME_FROM);
    let duration_cell = row.cell(COL_DURATION);
    let issue_cell = row.cell(COL_ISSUE_ID);
    let description_cell = row.cell(COL_DESCRIPTION);

    let date = date_cell
        .as_date()
        .ok_or_else(|| invalid("date", "date", date_cell))?;
    let time_from = from_cell
        .as_time()
        .ok_or_else(|| invalid("time_from", "time", from_cell))?;
    let duration = duration_cell
        .as_duration()
        .ok_or_else(|| invalid("duration", "duration", duration_cell))?;
    let issue_id = issue_cell
        .as_text()
        .ok_or_else(|| invalid("issue_id", "issue identifier", issue_cell))?;
    if issue_id.is_empty() {
        return Err(RowError::MissingIssue);
    }
    let description = description_cell
        .as_text()
        .ok_or_else(|| invalid("description", "text", description_cell))?;

    debug!(
        "parsed from row {}: date={}, time_from={}, time_to={}, duration={}, issue_id={}, description={:?}",
        row.number,
        date,
        time_from,
        row.cell(COL_TIME_TO),
        duration,
        issue_id,
        description
    );

    let naive = date.and_time(time_from);
    let started_at = localize(&naive, tz)?;
    let duration_seconds = duration.total_seconds();

    debug!(
        "calculated dates and durations: started_at={}, duration_seconds={}",
        started_at, duration_seconds
    );

    Ok(WorklogRecord {
        started_at,
        duration_seconds,
        issue_id,
        description,
    })
}

/// Attach the UTC offset `tz` uses at `naive`. Ambiguous times (clocks
/// going back) take the earlier instant. Times skipped by clocks going
/// forward keep the offset in effect just before the jump.
fn localize<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Result<DateTime<FixedOffset>, RowError> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Ok(dt.fixed_offset());
    }

    let before = (1..=24)
        .filter_map(|h| naive.checked_sub_signed(Duration::hours(h)))
        .find_map(|earlier| tz.from_local_datetime(&earlier).latest())
        .map(|dt| dt.offset().fix());
    let started_at = before
        .and_then(|offset| offset.from_local_datetime(naive).single())
        .ok_or_else(|| RowError::NonexistentLocalTime(naive.to_string()))?;

    warn!(
        "local time {} does not exist (DST gap), using offset {} from before the change",
        naive,
        started_at.offset()
    );
    Ok(started_at)
}

/// [`normalize`], reporting a skipped row as a warning instead of an error.
pub fn normalize_or_warn<Tz: TimeZone>(row: &RawRow, tz: &Tz) -> Option<WorklogRecord> {
    debug!("Processing row: {}", row);
    match normalize(row, tz) {
        Ok(record) => Some(record),
        Err(e) => {
            warning(format!("Row {} skipped: {}", row, e));
            None
        }
    }
}
