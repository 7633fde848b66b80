//! coverletter: interview-driven cover letter generation with text and PDF export.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ExportedDocument, GenerateOptions, SessionOutcome, export_pdf_at, generate, generate_at,
    init_template, init_template_at,
};
pub use domain::{
    AppError, CoverLetter, DocumentConfig, DocumentLayout, IndustryList, JobDetails, SaveFormat,
    Template,
};
