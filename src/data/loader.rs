//! # Diary Table Loader
//!
//! CSV loading for daily-log exports and newest-file discovery in the
//! data directory. Column headers are matched against English names and
//! the Japanese headers produced by the original logging app.

use super::record::{parse_date, parse_duration_hours, parse_number, DailyRecord};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Accepted header spellings per logical column.
const DATE_HEADERS: &[&str] = &["date", "日付"];
const MORNING_MOOD_HEADERS: &[&str] = &["morning_mood", "朝の気分度合"];
const EVENING_MOOD_HEADERS: &[&str] = &["evening_mood", "夜の気分度合い"];
const MORNING_STRESS_HEADERS: &[&str] = &["morning_stress", "朝のストレス度"];
const EVENING_STRESS_HEADERS: &[&str] = &["evening_stress", "夜のストレス度合い"];
const SLEEP_HEADERS: &[&str] = &["sleep_duration", "sleep_duration_hours", "睡眠時間"];
const ACTIVITY_HEADERS: &[&str] = &["activity_level", "活動量"];
const DIARY_HEADERS: &[&str] = &["diary", "diary_text", "日記"];

/// Column positions resolved from the header row.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnMap {
    date: Option<usize>,
    morning_mood: Option<usize>,
    evening_mood: Option<usize>,
    morning_stress: Option<usize>,
    evening_stress: Option<usize>,
    sleep: Option<usize>,
    activity: Option<usize>,
    diary: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.iter().any(|a| a.eq_ignore_ascii_case(h.trim())))
        };

        Self {
            date: find(DATE_HEADERS),
            morning_mood: find(MORNING_MOOD_HEADERS),
            evening_mood: find(EVENING_MOOD_HEADERS),
            morning_stress: find(MORNING_STRESS_HEADERS),
            evening_stress: find(EVENING_STRESS_HEADERS),
            sleep: find(SLEEP_HEADERS),
            activity: find(ACTIVITY_HEADERS),
            diary: find(DIARY_HEADERS),
        }
    }
}

/// A loaded daily-log table, rows in input order.
#[derive(Debug, Clone)]
pub struct DiaryTable {
    /// Normalized records, one per input row
    pub records: Vec<DailyRecord>,
    /// Whether the activity column existed in the input at all
    pub has_activity: bool,
}

impl DiaryTable {
    /// Load a daily-log CSV from disk.
    ///
    /// Missing optional columns yield `None` for every record; only an
    /// unreadable file or malformed CSV structure is an error.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;

        let columns = ColumnMap::from_headers(reader.headers()?);
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

            records.push(DailyRecord {
                date: cell(columns.date).and_then(parse_date),
                morning_mood: cell(columns.morning_mood).and_then(parse_number),
                evening_mood: cell(columns.evening_mood).and_then(parse_number),
                morning_stress: cell(columns.morning_stress).and_then(parse_number),
                evening_stress: cell(columns.evening_stress).and_then(parse_number),
                sleep_duration_hours: cell(columns.sleep).and_then(parse_duration_hours),
                activity_level: cell(columns.activity).and_then(parse_number),
                diary_text: cell(columns.diary).map(|s| s.to_string()),
            });
        }

        Ok(Self {
            records,
            has_activity: columns.activity.is_some(),
        })
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Find the most recently modified CSV file in a directory.
///
/// Returns `Ok(None)` when the directory holds no CSV files; the caller
/// decides whether that is fatal.
pub fn latest_csv<P: AsRef<Path>>(dir: P) -> Result<Option<PathBuf>> {
    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv || !path.is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        match &newest {
            Some((best, _)) if *best >= modified => {}
            _ => newest = Some((modified, path)),
        }
    }

    Ok(newest.map(|(_, path)| path))
}
