use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Gemini API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base endpoint; the model path is appended per request.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used for every completion.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("gemini.timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("gemini.model must not be empty"));
        }
        Ok(())
    }

    /// `{api_url}/models/{model}:generateContent`
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let raw = format!("{}/models/{}:generateContent", base, self.model.trim());
        Url::parse(&raw)
            .map_err(|e| AppError::config_error(format!("Invalid Gemini endpoint '{}': {}", raw, e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_timeout() -> u64 {
    60
}
