//! Formatting utilities used for console reports.

/// Render seconds as `01h 30m` (or `01h 30m 15s` when seconds are present).
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.abs();
    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    if seconds == 0 {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
    }
}

/// Cut a description down to `max` characters, marking the cut with `…`.
pub fn shorten(s: &str, max: usize) -> String {
    let s = s.trim();
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
