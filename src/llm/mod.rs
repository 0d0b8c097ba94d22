//! # LLM Module
//!
//! Classifier trait, sentiment label vocabulary and the OpenAI client.

mod classifier;
mod openai;

pub use classifier::{ClassificationError, MockClassifier, SentimentLabel, TextClassifier};
pub use openai::OpenAiClassifier;
