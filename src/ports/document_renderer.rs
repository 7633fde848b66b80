//! Document rendering port.

use std::path::Path;

use crate::domain::{AppError, DocumentLayout};

/// Non-fatal conditions reported by a renderer after a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// Configured font files could not be loaded; built-in serif fonts were used.
    FallbackFont { reason: String },
}

/// Port for turning a laid-out document into a file.
pub trait DocumentRenderer {
    fn render(&self, layout: &DocumentLayout, output: &Path) -> Result<Vec<RenderWarning>, AppError>;
}
