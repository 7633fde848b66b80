pub mod layout;
pub mod metrics;

pub use layout::{
    Alignment, Block, DocumentLayout, DocumentMetadata, FontWeight, Mark, PDF_EXTENSION, Page,
    PageGeometry, PlacedLine, PlacedRule, TextStyle, normalize_pdf_filename,
};
