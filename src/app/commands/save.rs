//! Persisting a generated letter as text and/or PDF.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CoverLetter, JobDetails, SaveFormat};
use crate::ports::{DocumentRenderer, Prompter};

use super::export::{describe_warning, export_pdf};
use super::menu::read_menu_choice;

const TEXT_EXTENSION: &str = ".txt";

/// Files written by the save flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    pub saved: Vec<PathBuf>,
    pub failures: usize,
}

fn default_base_name() -> String {
    format!("cover_letter_{}", chrono::Local::now().format("%Y-%m-%d"))
}

fn text_file_name(base: &str) -> String {
    if base.to_lowercase().ends_with(TEXT_EXTENSION) {
        base.to_string()
    } else {
        format!("{base}{TEXT_EXTENSION}")
    }
}

/// Offer to save `letter`. Write failures are reported and do not stop the
/// remaining formats; only console errors are returned.
pub fn offer_save(
    prompter: &impl Prompter,
    renderer: &impl DocumentRenderer,
    letter: &CoverLetter,
    details: &JobDetails,
    dir: &Path,
) -> Result<SaveOutcome, AppError> {
    let mut outcome = SaveOutcome::default();
    if !prompter.confirm("Do you want to save this cover letter?")? {
        return Ok(outcome);
    }

    prompter.say("Save options:");
    for (position, format) in SaveFormat::ALL.iter().enumerate() {
        prompter.say(&format!("{}. {}", position + 1, format.label()));
    }
    let choice = read_menu_choice(prompter, "Choose a format (1-3)", SaveFormat::ALL.len())?;
    let format = SaveFormat::from_menu(choice)
        .ok_or_else(|| AppError::Input(format!("unknown save format {}", choice)))?;

    let base = prompter.ask_with_default("Enter base filename (without extension)", &default_base_name())?;
    let base = base.trim();

    if format.writes_text() {
        let path = dir.join(text_file_name(base));
        match fs::write(&path, letter.as_str()) {
            Ok(()) => {
                prompter.say(&format!("Cover letter saved to {}", path.display()));
                outcome.saved.push(path);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "text save failed");
                prompter.say(&format!("Failed to save text file: {}", err));
                outcome.failures += 1;
            }
        }
    }

    if format.writes_pdf() {
        match export_pdf(renderer, letter, details, dir, base) {
            Ok(exported) => {
                for warning in &exported.warnings {
                    prompter.say(describe_warning(warning));
                }
                prompter.say(&format!(
                    "PDF cover letter successfully exported to {}",
                    exported.path.display()
                ));
                outcome.saved.push(exported.path);
            }
            Err(err) => {
                tracing::warn!(error = %err, "pdf export failed");
                prompter.say(&format!("Failed to create PDF: {}", err));
                outcome.failures += 1;
            }
        }
    }

    Ok(outcome)
}
