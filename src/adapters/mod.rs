pub mod dialoguer_prompter;
pub mod embedded_prompts;
pub mod gemini_client_http;
pub mod pdf_renderer;
