//! PDF export of a generated letter.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, CoverLetter, DocumentLayout, JobDetails, normalize_pdf_filename};
use crate::ports::{DocumentRenderer, RenderWarning};

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Normalized file name, also used as the document title.
    pub file_name: String,
    pub path: PathBuf,
    pub warnings: Vec<RenderWarning>,
}

/// Lay out `letter` and render it to `dir/<output_name>.pdf`.
pub fn export_pdf(
    renderer: &impl DocumentRenderer,
    letter: &CoverLetter,
    details: &JobDetails,
    dir: &Path,
    output_name: &str,
) -> Result<ExportedDocument, AppError> {
    let file_name = normalize_pdf_filename(output_name);
    let path = dir.join(&file_name);
    let layout = DocumentLayout::cover_letter(letter, details, &file_name);

    let warnings = renderer.render(&layout, &path)?;
    Ok(ExportedDocument { file_name, path, warnings })
}

/// User-facing text for a renderer warning.
pub fn describe_warning(warning: &RenderWarning) -> &'static str {
    match warning {
        RenderWarning::FallbackFont { .. } => {
            "Times New Roman font not found, using default fonts."
        }
    }
}
