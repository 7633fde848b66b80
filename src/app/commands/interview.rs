//! Interactive collection of job application details.

use crate::domain::{AppError, IndustryList, JobDetails};
use crate::ports::{CompletionClient, Prompter};

use super::industry::suggest_industries;
use super::menu::read_menu_choice;

/// Menu position of the free-text industry option.
const OTHER_INDUSTRY: usize = 4;

/// Ask for every job field, suggesting industries from the company name.
pub fn collect_job_details(
    client: &impl CompletionClient,
    prompter: &impl Prompter,
) -> Result<JobDetails, AppError> {
    prompter.say("Please provide details about the job you're applying for:");
    let company_name = prompter.ask("Company name")?;

    prompter.say(&format!("\nSuggesting industries for {}...", company_name));
    let suggestions = suggest_industries(client, prompter, &company_name);
    let industry = select_industry(prompter, &suggestions)?;

    Ok(JobDetails {
        company_name,
        job_title: prompter.ask("Job title")?,
        job_description: prompter.ask("Key requirements from job description (comma separated)")?,
        your_name: prompter.ask("Your name")?,
        industry,
        email: prompter.ask("Your email address")?,
        phone: prompter.ask("Your phone number")?,
        city: prompter.ask("Your city")?,
        country: prompter.ask("Your country")?,
    })
}

/// Show the suggested industries plus an "Other" entry and return the chosen label.
pub fn select_industry(prompter: &impl Prompter, suggestions: &IndustryList) -> Result<String, AppError> {
    prompter.say("\nSelect the most appropriate industry:");
    for (position, industry) in suggestions.iter().enumerate() {
        prompter.say(&format!("{}. {}", position + 1, industry));
    }
    prompter.say(&format!("{}. Other (specify)", OTHER_INDUSTRY));

    let choice = read_menu_choice(prompter, "Enter your choice (1-4)", OTHER_INDUSTRY)?;
    match suggestions.get(choice) {
        Some(industry) => Ok(industry.to_string()),
        None => prompter.ask("Please specify the industry"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCompletionClient, ScriptedPrompter};

    #[test]
    fn collects_all_fields_in_order() {
        let client = FakeCompletionClient::new().respond("1. Aviation\n2. Travel\n3. Logistics");
        let prompter = ScriptedPrompter::new([
            "Skyways",
            "2",
            "Pilot",
            "IFR, multi-engine",
            "Robin Park",
            "robin@example.com",
            "555-0199",
            "Denver",
            "USA",
        ]);

        let details = collect_job_details(&client, &prompter).unwrap();

        assert_eq!(
            details,
            JobDetails {
                company_name: "Skyways".into(),
                job_title: "Pilot".into(),
                job_description: "IFR, multi-engine".into(),
                your_name: "Robin Park".into(),
                industry: "Travel".into(),
                email: "robin@example.com".into(),
                phone: "555-0199".into(),
                city: "Denver".into(),
                country: "USA".into(),
            }
        );
        assert_eq!(prompter.remaining(), 0);
        assert!(prompter.output_contains("1. Aviation"));
        assert!(prompter.output_contains("4. Other (specify)"));
    }

    #[test]
    fn other_option_asks_for_free_text() {
        let prompter = ScriptedPrompter::new(["4", "Biotech"]);

        let industry = select_industry(&prompter, &IndustryList::fallback()).unwrap();

        assert_eq!(industry, "Biotech");
        assert_eq!(prompter.asked().last().unwrap(), "Please specify the industry");
    }

    #[test]
    fn invalid_menu_input_reprompts_then_selects() {
        let prompter = ScriptedPrompter::new(["abc", "5", "2"]);

        let industry = select_industry(&prompter, &IndustryList::fallback()).unwrap();

        assert_eq!(industry, "Finance");
        assert_eq!(prompter.asked().len(), 3);
    }

    #[test]
    fn suggestion_failure_does_not_stop_interview() {
        let client = FakeCompletionClient::new().fail("offline");
        let prompter = ScriptedPrompter::new(["", "1", "", "", "", "", "", "", ""]);

        let details = collect_job_details(&client, &prompter).unwrap();

        assert_eq!(details.industry, "Technology");
        assert_eq!(details.company_name, "");
    }
}
