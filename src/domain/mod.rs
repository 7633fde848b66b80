pub mod configuration;
pub mod document;
pub mod error;
pub mod industry;
pub mod job_details;
pub mod letter;
pub mod save_format;
pub mod template;

pub use configuration::{AppConfig, ConfigFile, DocumentConfig, GeminiApiConfig, TemplateConfig};
pub use document::{DocumentLayout, normalize_pdf_filename};
pub use error::AppError;
pub use industry::IndustryList;
pub use job_details::JobDetails;
pub use letter::{CompositionMode, CoverLetter};
pub use save_format::SaveFormat;
pub use template::{DEFAULT_TEMPLATE_PATH, Template, read_template};
