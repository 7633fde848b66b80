//! Startup configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use super::app_config::{API_KEY_VAR, AppConfig, CONFIG_FILE_NAME, ConfigFile};
use crate::domain::AppError;

/// Load configuration for a session rooted at `root`.
///
/// Reads `.env` from `root` when present, then `GOOGLE_API_KEY` from the
/// environment, then the settings file: `explicit` when given (must exist),
/// otherwise `root/coverletter.toml` if it exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_dotenv(root)?;
    let file = load_config_file(root, explicit)?;
    AppConfig::from_parts(std::env::var(API_KEY_VAR).ok(), file)
}

/// Apply `root/.env` to the process environment. A missing file is skipped;
/// parse errors are returned.
fn load_dotenv(root: &Path) -> Result<(), AppError> {
    let path = root.join(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::config_error(format!(
            "Cannot load '{}': {}",
            path.display(),
            err
        ))),
    }
}

/// Load only the settings file. Used by commands that never call the API.
pub fn load_config_file(root: &Path, explicit: Option<&Path>) -> Result<ConfigFile, AppError> {
    match explicit {
        Some(path) => {
            let content = fs::read_to_string(root.join(path)).map_err(|e| {
                AppError::config_error(format!("Cannot read config file '{}': {}", path.display(), e))
            })?;
            ConfigFile::parse_toml(&content)
        }
        None => match fs::read_to_string(root.join(CONFIG_FILE_NAME)) {
            Ok(content) => ConfigFile::parse_toml(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(err) => Err(err.into()),
        },
    }
}
