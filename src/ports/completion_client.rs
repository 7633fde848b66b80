//! Generative completion service port.

use crate::domain::AppError;

/// Port for text completion requests.
///
/// One call is one request: a prompt goes out, generated text comes back.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}
