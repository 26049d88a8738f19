//! Entry key classification
//!
//! Every key of the input object is either a calendar date, one of the seven
//! short weekday names, or something else entirely.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;
use std::sync::OnceLock;

/// Weekday names indexed by days from Sunday
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Date-only key formats, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%a %b %d %Y",
];

/// Date-time key formats without an offset
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// `YYYY` or `YYYY-MM`
fn partial_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})(?:-(\d{2}))?$").unwrap())
}

/// A classified entry key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    /// Calendar date; date-only keys sit at midnight
    Date(NaiveDateTime),
    /// One of the seven weekday names
    Weekday(Weekday),
    /// Neither a date nor a weekday name
    Unrecognized(String),
}

impl EntryKey {
    /// Classify a raw key
    pub fn classify(input: &str) -> Self {
        if let Some(at) = parse_date_key(input) {
            return EntryKey::Date(at);
        }

        match weekday_from_name(input) {
            Some(day) => EntryKey::Weekday(day),
            None => EntryKey::Unrecognized(input.to_string()),
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, EntryKey::Date(_))
    }
}

/// Parse a key as a calendar date.
///
/// Date-only keys are taken as the calendar day they name, with no timezone
/// shift. Keys carrying an explicit offset are read at their UTC wall-clock
/// time, so "2024-01-10T00:00:00Z" stays on January 10 for every viewer.
pub fn parse_date_key(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .or_else(|| parse_partial_date(trimmed))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `YYYY` is January 1 of that year, `YYYY-MM` the first of that month
fn parse_partial_date(input: &str) -> Option<NaiveDate> {
    let caps = partial_date_regex().captures(input)?;
    let year = caps[1].parse().ok()?;
    let month = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Look up a weekday by its exact short name ("Sun" .. "Sat")
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "Sun" => Some(Weekday::Sun),
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Short name of a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_sunday() as usize]
}
