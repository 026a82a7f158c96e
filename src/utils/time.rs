//! Time utilities: parsing HH:MM[:SS] and elapsed durations, formatting the
//! timestamps exchanged with Jira.

use crate::models::cell::ElapsedTime;
use chrono::{DateTime, FixedOffset, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Timestamp layout used by Jira for worklog `started` values,
/// e.g. `2024-03-01T09:00:00.000-0500`.
pub const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Parse an elapsed time written as `H:MM` / `H:MM:SS` (hours unbounded) or
/// as an ISO-8601 duration such as `PT1H30M`.
pub fn parse_elapsed(s: &str) -> Option<ElapsedTime> {
    let s = s.trim();
    if s.starts_with('P') || s.starts_with('p') {
        return parse_iso_duration(s);
    }

    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    let hours = parts[0].parse::<u32>().ok()?;
    let minutes = parts[1].parse::<u32>().ok()?;
    let seconds = match parts.get(2) {
        Some(sec) => sec.parse::<u32>().ok()?,
        None => 0,
    };
    if minutes > 59 || seconds > 59 {
        return None;
    }
    Some(ElapsedTime::new(hours, minutes, seconds))
}

fn iso_duration_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.\d+)?S)?$").ok())
        .as_ref()
}

fn parse_iso_duration(s: &str) -> Option<ElapsedTime> {
    let caps = iso_duration_regex()?.captures(s)?;
    let group = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let total = group(1)? as u64 * 3600 + group(2)? as u64 * 60 + group(3)? as u64;
    Some(ElapsedTime::from_seconds(total))
}

pub fn format_jira_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format(JIRA_TIMESTAMP_FORMAT).to_string()
}

pub fn parse_jira_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, JIRA_TIMESTAMP_FORMAT).ok()
}
