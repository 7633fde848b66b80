mod fake_completion_client;
mod recording_renderer;
mod scripted_prompter;

pub use fake_completion_client::FakeCompletionClient;
pub use recording_renderer::RecordingRenderer;
pub use scripted_prompter::ScriptedPrompter;
