use std::time::Duration;

use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::DocType;

/// Shown on the document when the summarizer call fails. The upload
/// itself always completes.
pub const FALLBACK_SUMMARY: &str = "AI summarization failed, but the document is uploaded.";

/// Shown when the model answers with an empty body.
pub const EMPTY_SUMMARY: &str = "No summary available.";

/// Trait for AI summarization backends
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a short summary for an uploaded document from its metadata.
    async fn summarize(
        &self,
        file_name: &str,
        subject: &str,
        doc_type: DocType,
    ) -> Result<String, AppError>;
}

/// Summarizer backed by the Gemini generateContent REST API.
/// One request per upload, no retries.
pub struct GeminiSummarizer {
    client: reqwest::Client,
    config: AppConfig,
}

impl GeminiSummarizer {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Summarizer(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn build_prompt(file_name: &str, subject: &str, doc_type: DocType) -> String {
        format!(
            "You are an academic assistant. Generate a short (2-sentence) professional \
             summary for an academic document named \"{file_name}\" related to the subject \
             \"{subject}\" of type \"{doc_type}\". If it sounds like a real academic topic, \
             provide helpful context."
        )
    }

    /// Pull the generated text out of a generateContent response body.
    fn extract_text(body: &Value) -> Option<String> {
        let text = body
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()?
            .trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(
        &self,
        file_name: &str,
        subject: &str,
        doc_type: DocType,
    ) -> Result<String, AppError> {
        let url = format!(
            "{}/{}:generateContent",
            self.config.gemini_endpoint, self.config.gemini_model
        );

        let request_body = json!({
            "contents": [{
                "parts": [{ "text": Self::build_prompt(file_name, subject, doc_type) }]
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        });

        tracing::debug!(model = %self.config.gemini_model, "requesting document summary");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.gemini_api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Summarizer(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Summarizer(format!("HTTP {status}: {body}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Summarizer(format!("invalid response body: {e}")))?;

        Ok(Self::extract_text(&body).unwrap_or_else(|| EMPTY_SUMMARY.to_string()))
    }
}

/// No-op summarizer for development, tests and offline runs
pub struct NoopSummarizer;

#[async_trait::async_trait]
impl Summarizer for NoopSummarizer {
    async fn summarize(
        &self,
        _file_name: &str,
        _subject: &str,
        _doc_type: DocType,
    ) -> Result<String, AppError> {
        tracing::debug!("NoopSummarizer: skipping AI summary");
        Ok(EMPTY_SUMMARY.to_string())
    }
}

/// Summarizer that always fails (for testing the fallback path)
#[cfg(test)]
pub struct AlwaysFailingSummarizer;

#[cfg(test)]
#[async_trait::async_trait]
impl Summarizer for AlwaysFailingSummarizer {
    async fn summarize(
        &self,
        _file_name: &str,
        _subject: &str,
        _doc_type: DocType,
    ) -> Result<String, AppError> {
        Err(AppError::Summarizer("connection refused".to_string()))
    }
}

/// Factory function to create the summarizer described by the config
pub fn create_summarizer(config: &AppConfig) -> Box<dyn Summarizer> {
    match config.summarizer_kind.to_lowercase().as_str() {
        "gemini" => {
            if config.gemini_api_key.is_empty() {
                tracing::warn!("GEMINI_API_KEY is not set, summaries are disabled");
                return Box::new(NoopSummarizer);
            }
            match GeminiSummarizer::new(config.clone()) {
                Ok(s) => Box::new(s),
                Err(e) => {
                    tracing::warn!("Failed to build Gemini client ({}), summaries disabled", e);
                    Box::new(NoopSummarizer)
                }
            }
        }
        "noop" | "none" | "disabled" => Box::new(NoopSummarizer),
        other => {
            tracing::warn!("Unknown summarizer kind '{}', using noop", other);
            Box::new(NoopSummarizer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_summarizer() {
        let summarizer = NoopSummarizer;
        let summary = summarizer
            .summarize("Midterm.pdf", "Physics", DocType::Assignment)
            .await
            .unwrap();
        assert_eq!(summary, EMPTY_SUMMARY);
    }

    #[test]
    fn test_extract_text_from_candidate_response() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "  A concise overview of wave mechanics.  " }]
                }
            }]
        });
        assert_eq!(
            GeminiSummarizer::extract_text(&body).as_deref(),
            Some("A concise overview of wave mechanics.")
        );
    }

    #[test]
    fn test_extract_text_handles_missing_or_empty_content() {
        assert_eq!(GeminiSummarizer::extract_text(&json!({})), None);
        let empty = json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        });
        assert_eq!(GeminiSummarizer::extract_text(&empty), None);
    }

    #[test]
    fn test_build_prompt_mentions_metadata() {
        let prompt = GeminiSummarizer::build_prompt("Midterm.pdf", "Physics", DocType::Notes);
        assert!(prompt.contains("\"Midterm.pdf\""));
        assert!(prompt.contains("\"Physics\""));
        assert!(prompt.contains("\"Notes\""));
    }

    #[tokio::test]
    async fn test_create_summarizer_without_key_degrades_to_noop() {
        let mut config = AppConfig::default();
        config.summarizer_kind = "gemini".to_string();
        config.gemini_api_key.clear();

        // Without a key the factory falls back to noop, so this must not
        // touch the network.
        let summarizer = create_summarizer(&config);
        let summary = summarizer
            .summarize("Midterm.pdf", "Physics", DocType::Notes)
            .await
            .unwrap();
        assert_eq!(summary, EMPTY_SUMMARY);

        config.summarizer_kind = "carrier-pigeon".to_string();
        let summarizer = create_summarizer(&config);
        let summary = summarizer
            .summarize("Midterm.pdf", "Physics", DocType::Notes)
            .await
            .unwrap();
        assert_eq!(summary, EMPTY_SUMMARY);
    }
}
