//! # Daily Record
//!
//! Typed representation of one day's log entry, plus the lenient field
//! parsers that turn messy hand-logged values into options.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// One normalized daily-log entry.
///
/// Every optional field is always present on the struct; unparseable or
/// missing input cells become `None` rather than an error. Hand-kept logs
/// are expected to be messy and a bad cell must never sink the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    /// Calendar date of the entry; `None` when the cell was malformed
    pub date: Option<NaiveDate>,
    /// Self-reported mood after waking
    pub morning_mood: Option<f64>,
    /// Self-reported mood before sleep
    pub evening_mood: Option<f64>,
    /// Self-reported stress after waking
    pub morning_stress: Option<f64>,
    /// Self-reported stress before sleep
    pub evening_stress: Option<f64>,
    /// Sleep duration in hours, converted from a clock-duration string
    pub sleep_duration_hours: Option<f64>,
    /// Step-count-like activity measure; the column may be absent entirely
    pub activity_level: Option<f64>,
    /// Free-form diary text; may be empty
    pub diary_text: Option<String>,
}

impl DailyRecord {
    /// Returns true when there is no diary text worth classifying.
    pub fn diary_is_blank(&self) -> bool {
        match &self.diary_text {
            None => true,
            Some(text) => text.trim().is_empty(),
        }
    }
}

/// Date formats accepted from the input table.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parse a date cell, returning `None` for anything unrecognizable.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{1,2})(?::(\d{1,2}))?$").unwrap())
}

/// Convert a clock-duration string (`H:MM:SS` or `H:MM`) to fractional hours.
///
/// Anything outside that grammar maps to `None`.
pub fn parse_duration_hours(value: &str) -> Option<f64> {
    let caps = duration_regex().captures(value.trim())?;

    let hours: f64 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: f64 = caps.get(2)?.as_str().parse().ok()?;
    let seconds: f64 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0.0,
    };

    if minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }

    Some(hours + minutes / 60.0 + seconds / 3600.0)
}

/// Parse a numeric cell, returning `None` for blanks and non-numbers.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
