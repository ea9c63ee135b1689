//! Display helpers shared by tables, charts and CLI output.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a backend timestamp as a calendar date.
///
/// Accepts RFC 3339 (`2025-02-01T10:00:00.000Z`), a naive date-time, or a
/// bare `YYYY-MM-DD` bucket key. Anything else is returned unchanged.
pub fn format_date(raw: &str, format: &str) -> String {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format(format).to_string();
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.date().format(format).to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(format).to_string();
    }

    raw.to_string()
}

/// Cut `value` to `max_chars` characters, marking the cut with `...`.
pub fn ellipsize(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &value[..byte_index]),
        None => value.to_string(),
    }
}
