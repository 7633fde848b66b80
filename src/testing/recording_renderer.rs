use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DocumentLayout};
use crate::ports::{DocumentRenderer, RenderWarning};

/// Renderer that records layouts instead of producing files.
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: RefCell<Vec<(DocumentLayout, PathBuf)>>,
    warnings: Vec<RenderWarning>,
    failure: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warning(mut self, warning: RenderWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn rendered(&self) -> Vec<(DocumentLayout, PathBuf)> {
        self.rendered.borrow().clone()
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, layout: &DocumentLayout, output: &Path) -> Result<Vec<RenderWarning>, AppError> {
        if let Some(message) = &self.failure {
            return Err(AppError::DocumentRender(message.clone()));
        }
        self.rendered.borrow_mut().push((layout.clone(), output.to_path_buf()));
        Ok(self.warnings.clone())
    }
}
