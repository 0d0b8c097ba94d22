//! # Text Classifier
//!
//! Sentiment label vocabulary and the provider-agnostic classifier trait,
//! with a scripted mock implementation for tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Errors that can occur during a classification call
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("authentication rejected by provider")]
    Authentication,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("API error: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Sentiment label assigned to one diary entry.
///
/// The vocabulary is closed for reporting purposes, but the remote
/// classifier answers in free text, so anything outside the three
/// recognized words is carried verbatim in `Unrecognized`. `Error` is the
/// terminal label for a record whose classification call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    Error,
    Unrecognized(String),
}

impl SentimentLabel {
    /// Parse a trimmed classifier response into a label.
    ///
    /// Matches the English vocabulary case-insensitively plus the Japanese
    /// words the original dataset's prompts produce.
    pub fn from_response(response: &str) -> Self {
        let trimmed = response.trim();
        let lowered = trimmed.to_lowercase();
        match lowered.as_str() {
            "positive" | "ポジティブ" => SentimentLabel::Positive,
            "negative" | "ネガティブ" => SentimentLabel::Negative,
            "neutral" | "ニュートラル" => SentimentLabel::Neutral,
            _ => SentimentLabel::Unrecognized(trimmed.to_string()),
        }
    }

    /// Project the label onto the {-1, 0, 1} scale.
    ///
    /// Everything that is not clearly positive or negative scores 0,
    /// including failed classifications and unrecognized responses.
    pub fn score(&self) -> i32 {
        match self {
            SentimentLabel::Positive => 1,
            SentimentLabel::Negative => -1,
            _ => 0,
        }
    }

    /// String form used in the labeled table and the report.
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Error => "Error",
            SentimentLabel::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for sentiment classifiers.
///
/// One call per diary entry; implementations own their transport and
/// failure semantics. Swappable for a mock in tests.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify the sentiment of a single text.
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassificationError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}

/// Mock classifier for testing.
///
/// Returns scripted labels per input text and counts every call, so tests
/// can assert both label routing and that no call happened at all.
pub struct MockClassifier {
    responses: HashMap<String, SentimentLabel>,
    fail_texts: HashSet<String>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl MockClassifier {
    /// Create a mock that answers `Neutral` for everything.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fail_texts: HashSet::new(),
            fail_all: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a label for a specific input text.
    pub fn with_response(mut self, text: &str, label: SentimentLabel) -> Self {
        self.responses.insert(text.to_string(), label);
        self
    }

    /// Force the call for a specific input text to fail.
    pub fn with_failure(mut self, text: &str) -> Self {
        self.fail_texts.insert(text.to_string());
        self
    }

    /// Force every call to fail.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    /// Number of classify calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_all || self.fail_texts.contains(text) {
            return Err(ClassificationError::Api {
                status: 500,
                body: "forced failure".to_string(),
            });
        }

        Ok(self
            .responses
            .get(text)
            .cloned()
            .unwrap_or(SentimentLabel::Neutral))
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_english() {
        assert_eq!(
            SentimentLabel::from_response("Positive"),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_response("  negative \n"),
            SentimentLabel::Negative
        );
        assert_eq!(
            SentimentLabel::from_response("NEUTRAL"),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_from_response_japanese() {
        assert_eq!(
            SentimentLabel::from_response("ポジティブ"),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_response("ネガティブ"),
            SentimentLabel::Negative
        );
        assert_eq!(
            SentimentLabel::from_response("ニュートラル"),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_from_response_unrecognized_kept_verbatim() {
        let label = SentimentLabel::from_response("  somewhat upbeat  ");
        assert_eq!(
            label,
            SentimentLabel::Unrecognized("somewhat upbeat".to_string())
        );
        assert_eq!(label.as_str(), "somewhat upbeat");
    }

    #[test]
    fn test_score_mapping_total() {
        assert_eq!(SentimentLabel::Positive.score(), 1);
        assert_eq!(SentimentLabel::Negative.score(), -1);
        assert_eq!(SentimentLabel::Neutral.score(), 0);
        assert_eq!(SentimentLabel::Error.score(), 0);
        assert_eq!(
            SentimentLabel::Unrecognized("anything".to_string()).score(),
            0
        );
    }

    #[test]
    fn test_score_mapping_idempotent() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Error,
        ] {
            assert_eq!(label.score(), label.score());
        }
    }

    #[tokio::test]
    async fn test_mock_scripted_responses() {
        let mock = MockClassifier::new()
            .with_response("great", SentimentLabel::Positive)
            .with_failure("broken");

        assert_eq!(
            mock.classify("great").await.unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            mock.classify("unscripted").await.unwrap(),
            SentimentLabel::Neutral
        );
        assert!(mock.classify("broken").await.is_err());
        assert_eq!(mock.call_count(), 3);
    }
}
