pub mod app_config;
pub mod gemini_config;
pub mod loader;

pub use app_config::{
    API_KEY_VAR, AppConfig, CONFIG_FILE_NAME, ConfigFile, DocumentConfig, TemplateConfig,
};
pub use gemini_config::GeminiApiConfig;
pub use loader::{load_config, load_config_file};
