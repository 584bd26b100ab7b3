//! Lodgement date formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown";

/// Format a lodgement date as day, full month name, year (`4 May 2021`).
///
/// Accepts ISO dates, ISO date-times and RFC 2822 dates. Anything else is
/// returned as sent.
pub fn format_lodgement_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|d| !d.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    match parse_date(raw) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    // HTTP dates end in "GMT"
    let rfc2822 = match raw.strip_suffix(" GMT") {
        Some(prefix) => format!("{} +0000", prefix),
        None => raw.to_string(),
    };
    DateTime::parse_from_rfc2822(&rfc2822)
        .ok()
        .map(|dt| dt.date_naive())
}
