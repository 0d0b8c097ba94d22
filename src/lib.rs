//! # Diary Sentiment
//!
//! Library for LLM-based sentiment analysis of personal daily-log data
//! (mood, stress, sleep, activity, free-text diary entries).
//!
//! ## Modules
//!
//! - `data` - Daily-log records, CSV loading and input discovery
//! - `llm` - Classifier trait, sentiment labels and the OpenAI client
//! - `sentiment` - Classification pipeline, labeled table and reporting
//! - `utils` - Configuration
//!
//! ## Example Usage
//!
//! ```no_run
//! use diary_sentiment::{DiaryTable, MockClassifier, SentimentPipeline};
//! use diary_sentiment::{LabelCounts, SentimentReport};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Load the newest daily-log export
//!     let table = DiaryTable::from_csv("data/log.csv").unwrap();
//!
//!     // Classify every diary entry
//!     let classifier = Arc::new(MockClassifier::new());
//!     let pipeline = SentimentPipeline::new(classifier);
//!     let scored = pipeline.run(table.records).await;
//!
//!     // Summarize
//!     let counts = LabelCounts::from_records(&scored);
//!     let report = SentimentReport::new(counts);
//!     println!("{}", report.render());
//! }
//! ```

pub mod data;
pub mod error;
pub mod llm;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use data::{latest_csv, DailyRecord, DiaryTable};
pub use error::{Error, Result};
pub use llm::{
    ClassificationError, MockClassifier, OpenAiClassifier, SentimentLabel, TextClassifier,
};
pub use sentiment::{
    write_labeled_csv, LabelCounts, ScoredRecord, SentimentPipeline, SentimentReport,
};
pub use utils::{load_config, AppConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
