use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::gemini_config::GeminiApiConfig;
use crate::domain::AppError;
use crate::domain::template::DEFAULT_TEMPLATE_PATH;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Optional settings file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "coverletter.toml";

/// Contents of `coverletter.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

impl ConfigFile {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.gemini.validate()?;
        Ok(file)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    #[serde(default = "default_template_path")]
    pub path: PathBuf,
    /// Offer free generation when the requested template is missing.
    #[serde(default = "default_true")]
    pub allow_no_template: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { path: default_template_path(), allow_no_template: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    #[serde(default = "default_font_regular")]
    pub font_regular: PathBuf,
    #[serde(default = "default_font_bold")]
    pub font_bold: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { font_regular: default_font_regular(), font_bold: default_font_bold() }
    }
}

/// Process configuration, built once at startup and passed by reference.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub gemini: GeminiApiConfig,
    pub template: TemplateConfig,
    pub document: DocumentConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[REDACTED]")
            .field("gemini", &self.gemini)
            .field("template", &self.template)
            .field("document", &self.document)
            .finish()
    }
}

impl AppConfig {
    /// Combine the API key with file settings. A missing or blank key is fatal.
    pub fn from_parts(api_key: Option<String>, file: ConfigFile) -> Result<Self, AppError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_VAR.into()))?;

        Ok(Self { api_key, gemini: file.gemini, template: file.template, document: file.document })
    }
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

fn default_font_regular() -> PathBuf {
    PathBuf::from("times.ttf")
}

fn default_font_bold() -> PathBuf {
    PathBuf::from("timesbd.ttf")
}

fn default_true() -> bool {
    true
}
