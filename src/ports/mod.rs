mod completion_client;
mod document_renderer;
mod prompter;

pub use completion_client::CompletionClient;
pub use document_renderer::{DocumentRenderer, RenderWarning};
pub use prompter::Prompter;
