use crate::utils::{date, excel_date, time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// An elapsed amount of time as read from a duration cell.
/// `hours` is not capped at 23: a `[h]:mm` cell can hold 25 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ElapsedTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Date, time-of-day or both; time-only cells sit on the 1899-12-30 epoch.
    DateTime(NaiveDateTime),
    Duration(ElapsedTime),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::DateTime(dt) => Some(dt.date()),
            CellValue::Number(n) => excel_date::serial_to_datetime(*n).map(|dt| dt.date()),
            CellValue::Text(s) => {
                date::parse_date(s).or_else(|| date::parse_datetime(s).map(|dt| dt.date()))
            }
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            CellValue::DateTime(dt) => Some(dt.time()),
            CellValue::Number(n) => {
                excel_date::serial_to_datetime(n.fract()).map(|dt| dt.time())
            }
            CellValue::Text(s) => time::parse_time(s)
                .or_else(|| date::parse_datetime(s).map(|dt| dt.time())),
            _ => None,
        }
    }

    /// Read the cell as an elapsed duration.
    ///
    /// Time-typed cells contribute their time of day only, the same way a
    /// `hh:mm` formatted duration column is usually entered.
    pub fn as_duration(&self) -> Option<ElapsedTime> {
        match self {
            CellValue::Duration(d) => Some(*d),
            CellValue::DateTime(dt) => {
                let t = dt.time();
                Some(ElapsedTime::new(t.hour(), t.minute(), t.second()))
            }
            CellValue::Number(n) if *n >= 0.0 => {
                let secs = excel_date::serial_to_seconds(*n)?;
                Some(ElapsedTime::from_seconds(u64::try_from(secs).ok()?))
            }
            CellValue::Text(s) => time::parse_elapsed(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.trim().to_string()),
            CellValue::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Empty => Some(String::new()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Text(s) => write!(f, "{:?}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
            CellValue::Duration(d) => write!(f, "{}", d),
        }
    }
}
