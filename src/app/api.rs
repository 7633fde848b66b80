//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! concrete adapters and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::gemini_client_http::HttpGeminiClient;
use crate::adapters::pdf_renderer::PrintPdfRenderer;
use crate::app::{
    AppContext,
    commands::{export, session, template},
};
use crate::domain::configuration::{load_config, load_config_file};
use crate::domain::{AppConfig, CoverLetter, DocumentConfig, JobDetails};

pub use crate::app::commands::export::ExportedDocument;
pub use crate::app::commands::session::SessionOutcome;
pub use crate::domain::AppError;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub config_path: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub require_template: bool,
    pub model: Option<String>,
}

impl GenerateOptions {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(template) = &self.template {
            config.template.path = template.clone();
        }
        if self.require_template {
            config.template.allow_no_template = false;
        }
        if let Some(model) = &self.model {
            config.gemini.model = model.clone();
        }
    }
}

fn resolve_fonts(root: &Path, document: &DocumentConfig) -> DocumentConfig {
    DocumentConfig {
        font_regular: root.join(&document.font_regular),
        font_bold: root.join(&document.font_bold),
    }
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Run an interactive cover letter session in the current directory.
pub fn generate(options: GenerateOptions) -> Result<SessionOutcome, AppError> {
    generate_at(std::env::current_dir()?, options)
}

/// Run an interactive cover letter session rooted at `root`.
///
/// Configuration is loaded before anything is asked, so a missing API key
/// fails without prompting.
pub fn generate_at(
    root: impl Into<PathBuf>,
    options: GenerateOptions,
) -> Result<SessionOutcome, AppError> {
    let root = root.into();
    let mut config = load_config(&root, options.config_path.as_deref())?;
    options.apply(&mut config);
    tracing::debug!(?config, root = %root.display(), "configuration loaded");

    let client = HttpGeminiClient::new(config.api_key.clone(), &config.gemini)?;
    let renderer = PrintPdfRenderer::new(&resolve_fonts(&root, &config.document));
    let ctx = AppContext::new(config, root, client, DialoguerPrompter::new(), renderer);

    session::run_session(&ctx)
}

// =============================================================================
// Template Command API
// =============================================================================

/// Write the built-in default template in the current directory.
pub fn init_template(
    config_path: Option<&Path>,
    template: Option<&Path>,
    force: bool,
) -> Result<PathBuf, AppError> {
    init_template_at(std::env::current_dir()?, config_path, template, force)
}

/// Write the built-in default template under `root`.
///
/// The destination is `template` when given, otherwise the configured
/// template path. No API key is needed.
pub fn init_template_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    template: Option<&Path>,
    force: bool,
) -> Result<PathBuf, AppError> {
    let root = root.into();
    let destination = match template {
        Some(path) => path.to_path_buf(),
        None => load_config_file(&root, config_path)?.template.path,
    };
    template::init_template(&root.join(destination), force)
}

// =============================================================================
// Export API
// =============================================================================

/// Render `letter` to `dir/<output_name>.pdf` without any interaction.
pub fn export_pdf_at(
    dir: &Path,
    letter: &CoverLetter,
    details: &JobDetails,
    output_name: &str,
    document: &DocumentConfig,
) -> Result<ExportedDocument, AppError> {
    let renderer = PrintPdfRenderer::new(&resolve_fonts(dir, document));
    export::export_pdf(&renderer, letter, details, dir, output_name)
}
