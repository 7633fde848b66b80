use std::fmt;

use super::template::Template;

/// How the letter prompt is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// Fill the blanks of a user template and nothing else.
    TemplateFill,
    /// Write a complete letter from the job details alone.
    FreeGeneration,
}

impl CompositionMode {
    pub fn for_template(template: Option<&Template>) -> Self {
        match template {
            Some(_) => CompositionMode::TemplateFill,
            None => CompositionMode::FreeGeneration,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompositionMode::TemplateFill => "template-fill",
            CompositionMode::FreeGeneration => "free-generation",
        }
    }
}

/// Generated letter text, kept verbatim as returned by the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLetter(String);

impl CoverLetter {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Paragraphs separated by a blank line, trimmed, empties dropped.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.0.split("\n\n").map(str::trim).filter(|p| !p.is_empty()).collect()
    }
}

impl fmt::Display for CoverLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
