//! # OpenAI Classifier
//!
//! Sentiment classification through the OpenAI chat-completions API
//! (or any OpenAI-compatible endpoint via a custom base URL).

use super::classifier::{ClassificationError, SentimentLabel, TextClassifier};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Fixed classification instruction sent as the system message.
const SYSTEM_PROMPT: &str =
    "Classify the sentiment of the diary entry as positive, negative, or neutral. \
     Answer with a single word.";

/// Default request timeout
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// OpenAI-compatible sentiment classifier
pub struct OpenAiClassifier {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClassifier {
    /// Create a new classifier with the default model.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            client,
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Set a custom base URL (for OpenAI-compatible APIs)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl TextClassifier for OpenAiClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, ClassificationError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": text }
            ],
            "temperature": 0.0
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ClassificationError::Authentication);
        }
        if status.as_u16() == 429 {
            return Err(ClassificationError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ClassificationError::InvalidResponse("missing content in response".to_string())
            })?;

        Ok(SentimentLabel::from_response(&content))
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}
