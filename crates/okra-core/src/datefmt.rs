//! Lenient converters between the canonical `YYYY-MM-DD` wire format and
//! the human-readable `Mon D YYYY` display format.
//!
//! These never fail: display formatting returns malformed input unchanged,
//! and canonicalization of an unrecognizable shape yields an empty string.

use chrono::{Datelike, NaiveDate};

use crate::month::Month;

/// Format a canonical `YYYY-MM-DD` date as `Mon D YYYY` (day unpadded).
///
/// Input that does not parse as a calendar date is returned unchanged.
pub fn to_display(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} {} {}", Month::of(d), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

/// Convert a `Mon D YYYY` display date back to `YYYY-MM-DD`.
///
/// Already-canonical input passes through unchanged. Anything else that is
/// not exactly three tokens with a known month abbreviation and a numeric
/// day and year yields an empty string.
pub fn to_canonical(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        return date.to_string();
    }

    let parts: Vec<&str> = date.split(' ').collect();
    if parts.len() != 3 {
        return String::new();
    }

    let Ok(month) = parts[0].parse::<Month>() else {
        return String::new();
    };
    let Ok(day) = parts[1].parse::<u32>() else {
        return String::new();
    };
    let Ok(year) = parts[2].parse::<i32>() else {
        return String::new();
    };

    format!("{year:04}-{:02}-{day:02}", month.number())
}
