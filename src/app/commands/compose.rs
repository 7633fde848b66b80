use crate::adapters::embedded_prompts::letter_prompt;
use crate::domain::{AppError, CompositionMode, CoverLetter, JobDetails, Template};
use crate::ports::CompletionClient;

/// Request a cover letter in the mode implied by `template`.
///
/// One request, no retry; the response text is returned verbatim.
pub fn compose_letter(
    client: &impl CompletionClient,
    details: &JobDetails,
    template: Option<&Template>,
) -> Result<CoverLetter, AppError> {
    let mode = CompositionMode::for_template(template);
    let prompt = letter_prompt(details, template)?;
    tracing::debug!(mode = mode.label(), prompt_chars = prompt.len(), "requesting cover letter");

    let text = client.complete(&prompt)?;
    Ok(CoverLetter::new(text))
}
