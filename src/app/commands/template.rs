//! Template loading for a session and the `init-template` command.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::embedded_prompts::DEFAULT_LETTER_TEMPLATE;
use crate::domain::{AppError, Template, read_template};
use crate::ports::Prompter;

/// Outcome of asking the user whether to use a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateDecision {
    Use(Template),
    FreeGeneration,
    /// The user wants a template but none exists; nothing should be generated.
    Abort,
}

/// Load the template at `path`, reporting unreadable files.
///
/// A missing file is a normal, silent `None`; any other failure is shown to the
/// user and also yields `None`.
pub fn load_template(prompter: &impl Prompter, path: &Path) -> Option<Template> {
    match read_template(path) {
        Ok(template) => template,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "template unreadable");
            prompter.say(&format!("Could not read template file '{}': {}", path.display(), err));
            None
        }
    }
}

/// Ask whether to use the template at `path` and resolve the composition mode.
///
/// `display_path` is the path as the user configured it, used in messages.
pub fn decide_template(
    prompter: &impl Prompter,
    path: &Path,
    display_path: &Path,
    allow_no_template: bool,
) -> Result<TemplateDecision, AppError> {
    if !prompter.confirm("Do you want to use an existing template?")? {
        return Ok(TemplateDecision::FreeGeneration);
    }

    if let Some(template) = load_template(prompter, path) {
        tracing::debug!(placeholders = template.placeholders().len(), "template loaded");
        return Ok(TemplateDecision::Use(template));
    }

    prompter.say(&format!("No template file found at '{}'.", display_path.display()));
    if allow_no_template
        && prompter.confirm("Would you like to let Gemini generate your cover letter without a template?")?
    {
        return Ok(TemplateDecision::FreeGeneration);
    }

    prompter.say(&format!(
        "Please create a template file named '{}' in the same directory (run `coverletter init-template` for a starting point).",
        display_path.display()
    ));
    Ok(TemplateDecision::Abort)
}

/// Write the built-in default template to `path`.
pub fn init_template(path: &Path, force: bool) -> Result<PathBuf, AppError> {
    if path.exists() && !force {
        return Err(AppError::TemplateExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_LETTER_TEMPLATE)?;
    Ok(path.to_path_buf())
}
