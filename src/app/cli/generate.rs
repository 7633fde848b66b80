//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{GenerateOptions, SessionOutcome};
use crate::domain::AppError;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Template file (overrides the configured path)
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,
    /// Abort instead of offering free generation when the template is missing
    #[arg(long)]
    require_template: bool,
    /// Gemini model name
    #[arg(long)]
    model: Option<String>,
}

/// Run a session and map its outcome to a process exit code.
pub fn run_generate(config: Option<PathBuf>, args: GenerateArgs) -> Result<i32, AppError> {
    let options = GenerateOptions {
        config_path: config,
        template: args.template,
        require_template: args.require_template,
        model: args.model,
    };

    match crate::app::api::generate(options)? {
        SessionOutcome::Generated { .. } | SessionOutcome::Aborted => Ok(0),
        SessionOutcome::GenerationFailed => Ok(1),
    }
}
