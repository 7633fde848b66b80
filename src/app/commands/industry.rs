//! Industry suggestions via the completion service.

use crate::adapters::embedded_prompts::industry_prompt;
use crate::domain::{AppError, IndustryList};
use crate::ports::{CompletionClient, Prompter};

/// Suggest three industries for `company_name`.
///
/// Never fails: any request or rendering error is reported and the fixed
/// fallback triple is returned instead.
pub fn suggest_industries(
    client: &impl CompletionClient,
    prompter: &impl Prompter,
    company_name: &str,
) -> IndustryList {
    match request_industries(client, company_name) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(error = %err, "industry suggestion failed, using defaults");
            prompter.say(&format!("Error suggesting industries: {}", err));
            IndustryList::fallback()
        }
    }
}

fn request_industries(
    client: &impl CompletionClient,
    company_name: &str,
) -> Result<IndustryList, AppError> {
    let prompt = industry_prompt(company_name)?;
    let response = client.complete(&prompt)?;
    let list = IndustryList::from_response(response.trim());
    tracing::debug!(industries = %list, "parsed industry suggestions");
    Ok(list)
}
