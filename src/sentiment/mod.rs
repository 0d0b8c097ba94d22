//! # Sentiment Module
//!
//! Classification pipeline, labeled-table export and report generation.

mod pipeline;
mod report;
mod table;

pub use pipeline::{ScoredRecord, SentimentPipeline};
pub use report::{LabelCounts, SentimentReport};
pub use table::write_labeled_csv;
