use std::env;

/// Configuration for the AI summarizer, the only external dependency.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Summarizer backend: "gemini" or "noop" (default: "gemini")
    pub summarizer_kind: String,

    /// Base URL of the Gemini generateContent API
    pub gemini_endpoint: String,

    /// API key; an empty key downgrades the summarizer to noop
    pub gemini_api_key: String,

    /// Model name (default: "gemini-3-flash-preview")
    pub gemini_model: String,

    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,

    /// Generation temperature (default: 0.7)
    pub temperature: f32,

    /// Maximum summary length in tokens (default: 100)
    pub max_output_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            summarizer_kind: "gemini".to_string(),
            gemini_endpoint: "https://generativelanguage.googleapis.com/v1beta/models"
                .to_string(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-3-flash-preview".to_string(),
            request_timeout_secs: 10,
            temperature: 0.7,
            max_output_tokens: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            summarizer_kind: env::var("SUMMARIZER_KIND").unwrap_or(default.summarizer_kind),

            gemini_endpoint: env::var("GEMINI_ENDPOINT").unwrap_or(default.gemini_endpoint),

            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or(default.gemini_api_key),

            gemini_model: env::var("GEMINI_MODEL").unwrap_or(default.gemini_model),

            request_timeout_secs: env::var("SUMMARIZER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),

            temperature: env::var("SUMMARIZER_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.temperature),

            max_output_tokens: env::var("SUMMARIZER_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_output_tokens),
        }
    }

    /// Create config for development and tests (no network calls)
    pub fn development() -> Self {
        Self {
            summarizer_kind: "noop".to_string(),
            ..Self::default()
        }
    }
}
