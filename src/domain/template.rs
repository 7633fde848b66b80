//! User-supplied cover letter template.

use std::fs;
use std::io;
use std::path::Path;

/// Default file name looked up in the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "template.txt";

/// Raw template text with human-readable placeholders such as `[Company Name]`.
///
/// An empty template is still a template; absence is modelled as `Option<Template>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bracketed placeholder tokens in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('[') {
            let after = &rest[start..];
            let Some(end) = after.find(']') else { break };
            let token = &after[..=end];
            if !found.contains(&token) {
                found.push(token);
            }
            rest = &after[end + 1..];
        }
        found
    }
}

/// Read a template from disk.
///
/// Returns `Ok(None)` when the file does not exist; every other I/O failure is
/// returned so the caller can report it.
pub fn read_template(path: &Path) -> io::Result<Option<Template>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(Template::new(text))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
