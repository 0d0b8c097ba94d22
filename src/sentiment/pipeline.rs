//! # Sentiment Pipeline
//!
//! Drives one classification call per non-blank diary entry and pairs
//! every record with its terminal label and score. A failed call marks
//! that record `Error` and the batch keeps going.

use crate::data::DailyRecord;
use crate::llm::{SentimentLabel, TextClassifier};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A daily record with its sentiment label and score attached.
///
/// Label and score exist jointly by construction; once emitted by the
/// pipeline a record is never mutated again.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    /// The normalized input record
    pub record: DailyRecord,
    /// Terminal sentiment label (success or `Error`)
    pub label: SentimentLabel,
    /// Numeric projection of the label onto {-1, 0, 1}
    pub score: i32,
}

impl ScoredRecord {
    fn new(record: DailyRecord, label: SentimentLabel) -> Self {
        let score = label.score();
        Self {
            record,
            label,
            score,
        }
    }
}

/// Sentiment classification pipeline
pub struct SentimentPipeline {
    classifier: Arc<dyn TextClassifier>,
}

impl SentimentPipeline {
    /// Create a pipeline around a classifier implementation.
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify every record, preserving input order.
    ///
    /// Blank diary entries become `Neutral` without a remote call. A
    /// failed call is logged with its row index and cause, the record
    /// gets the `Error` label, and every other record is unaffected.
    pub async fn run(&self, records: Vec<DailyRecord>) -> Vec<ScoredRecord> {
        let total = records.len();
        info!(
            "classifying {} records via {}",
            total,
            self.classifier.name()
        );

        let mut scored = Vec::with_capacity(total);
        let mut failures = 0usize;

        for (row, record) in records.into_iter().enumerate() {
            let label = if record.diary_is_blank() {
                debug!(row, "blank diary entry, skipping remote call");
                SentimentLabel::Neutral
            } else {
                // diary_is_blank() returned false, so the text is present
                let text = record.diary_text.as_deref().unwrap_or_default();
                match self.classifier.classify(text).await {
                    Ok(label) => label,
                    Err(e) => {
                        warn!(row, error = %e, "classification failed");
                        failures += 1;
                        SentimentLabel::Error
                    }
                }
            };

            scored.push(ScoredRecord::new(record, label));
        }

        if failures > 0 {
            warn!("{} of {} classification calls failed", failures, total);
        } else {
            info!("classified {} records", total);
        }

        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockClassifier;

    fn record_with_diary(text: Option<&str>) -> DailyRecord {
        DailyRecord {
            date: None,
            morning_mood: None,
            evening_mood: None,
            morning_stress: None,
            evening_stress: None,
            sleep_duration_hours: None,
            activity_level: None,
            diary_text: text.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_blank_entries_skip_remote_call() {
        let mock = Arc::new(MockClassifier::new());
        let pipeline = SentimentPipeline::new(mock.clone());

        let records = vec![
            record_with_diary(None),
            record_with_diary(Some("")),
            record_with_diary(Some("   \t ")),
        ];
        let scored = pipeline.run(records).await;

        assert_eq!(mock.call_count(), 0);
        for entry in &scored {
            assert_eq!(entry.label, SentimentLabel::Neutral);
            assert_eq!(entry.score, 0);
        }
    }

    #[tokio::test]
    async fn test_labels_stay_with_their_records() {
        let mock = Arc::new(
            MockClassifier::new()
                .with_response("良い一日だった", SentimentLabel::Positive)
                .with_response("最悪だった", SentimentLabel::Negative),
        );
        let pipeline = SentimentPipeline::new(mock.clone());

        let records = vec![
            record_with_diary(Some("良い一日だった")),
            record_with_diary(Some("")),
            record_with_diary(Some("最悪だった")),
        ];
        let scored = pipeline.run(records).await;

        assert_eq!(scored[0].label, SentimentLabel::Positive);
        assert_eq!(scored[0].score, 1);
        assert_eq!(scored[1].label, SentimentLabel::Neutral);
        assert_eq!(scored[1].score, 0);
        assert_eq!(scored[2].label, SentimentLabel::Negative);
        assert_eq!(scored[2].score, -1);
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_single_failure_is_isolated() {
        let mock = Arc::new(
            MockClassifier::new()
                .with_response("fine", SentimentLabel::Positive)
                .with_response("also fine", SentimentLabel::Negative)
                .with_failure("broken"),
        );
        let pipeline = SentimentPipeline::new(mock);

        let records = vec![
            record_with_diary(Some("fine")),
            record_with_diary(Some("broken")),
            record_with_diary(Some("also fine")),
        ];
        let scored = pipeline.run(records).await;

        assert_eq!(scored[0].label, SentimentLabel::Positive);
        assert_eq!(scored[1].label, SentimentLabel::Error);
        assert_eq!(scored[1].score, 0);
        assert_eq!(scored[2].label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn test_all_failures_still_complete() {
        let mock = Arc::new(MockClassifier::failing());
        let pipeline = SentimentPipeline::new(mock);

        let records = vec![
            record_with_diary(Some("one")),
            record_with_diary(Some("two")),
        ];
        let scored = pipeline.run(records).await;

        assert_eq!(scored.len(), 2);
        for entry in &scored {
            assert_eq!(entry.label, SentimentLabel::Error);
            assert_eq!(entry.score, 0);
        }
    }
}
