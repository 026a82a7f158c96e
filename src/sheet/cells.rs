//! Conversion of calamine cells into [`CellValue`].

use crate::models::{CellValue, ElapsedTime};
use crate::utils::{date, excel_date, time};
use calamine::Data;

pub(crate) fn from_calamine(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if dt.is_duration() {
                match excel_date::serial_to_seconds(serial).and_then(|s| u64::try_from(s).ok()) {
                    Some(secs) => CellValue::Duration(ElapsedTime::from_seconds(secs)),
                    None => CellValue::Number(serial),
                }
            } else {
                match excel_date::serial_to_datetime(serial) {
                    Some(naive) => CellValue::DateTime(naive),
                    None => CellValue::Number(serial),
                }
            }
        }
        Data::DateTimeIso(s) => from_iso_datetime(s),
        Data::DurationIso(s) => match time::parse_elapsed(s) {
            Some(d) => CellValue::Duration(d),
            None => CellValue::Text(s.clone()),
        },
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}

/// ODS files hand out ISO strings instead of serials.
fn from_iso_datetime(s: &str) -> CellValue {
    if let Some(dt) = date::parse_datetime(s) {
        return CellValue::DateTime(dt);
    }
    if let Some(d) = date::parse_date(s)
        && let Some(dt) = d.and_hms_opt(0, 0, 0)
    {
        return CellValue::DateTime(dt);
    }
    if let Some(t) = time::parse_time(s)
        && let Some(epoch) = excel_date::serial_to_datetime(0.0)
    {
        return CellValue::DateTime(epoch.date().and_time(t));
    }
    CellValue::Text(s.to_string())
}

pub(crate) fn from_csv_field(field: &str) -> CellValue {
    if field.trim().is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}
