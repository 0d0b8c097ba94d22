//! # Labeled Table Export
//!
//! Writes the scored record set back out as CSV. This file is the
//! contract with the chart-rendering step: every row carries the
//! normalized columns plus `sentiment_label` and `sentiment_score`.

use super::pipeline::ScoredRecord;
use crate::error::Result;
use std::path::Path;

fn format_opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the labeled table as a headered CSV file.
pub fn write_labeled_csv<P: AsRef<Path>>(records: &[ScoredRecord], path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record([
        "date",
        "morning_mood",
        "evening_mood",
        "morning_stress",
        "evening_stress",
        "sleep_duration_hours",
        "activity_level",
        "diary",
        "sentiment_label",
        "sentiment_score",
    ])?;

    for entry in records {
        let record = &entry.record;
        writer.write_record([
            record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            format_opt_f64(record.morning_mood),
            format_opt_f64(record.evening_mood),
            format_opt_f64(record.morning_stress),
            format_opt_f64(record.evening_stress),
            format_opt_f64(record.sleep_duration_hours),
            format_opt_f64(record.activity_level),
            record.diary_text.clone().unwrap_or_default(),
            entry.label.as_str().to_string(),
            entry.score.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
