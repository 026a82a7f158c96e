//! Excel serial date helpers.
//!
//! Spreadsheet applications store dates, times and durations as a number of
//! days since 1899-12-30; the fractional part is the time of day.

use chrono::{Duration, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Convert an Excel serial number into a naive date/time, rounded to the
/// nearest second. Returns `None` for negative or out-of-range values.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = serial_to_seconds(serial)?;
    excel_epoch().checked_add_signed(Duration::try_seconds(secs)?)
}

/// Convert an Excel serial number (days) into whole seconds.
pub fn serial_to_seconds(serial: f64) -> Option<i64> {
    let secs = (serial * SECONDS_PER_DAY).round();
    if !secs.is_finite() || secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    Some(secs as i64)
}
