//! Prompt texts embedded in the binary and rendered with minijinja.
//!
//! User-provided text (the template, every job field) is only ever passed in as a
//! variable, so braces inside a user's template are emitted verbatim.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value, context};

use crate::domain::{AppError, JobDetails, Template};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Default cover letter template written by `init-template`.
pub static DEFAULT_LETTER_TEMPLATE: &str = include_str!("../assets/letter/default_template.txt");

const INDUSTRY_SUGGESTION: &str = "industry_suggestion.j2";
const LETTER_TEMPLATE_FILL: &str = "letter_template_fill.j2";
const LETTER_FREE_GENERATION: &str = "letter_free_generation.j2";

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>, AppError> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for file in PROMPTS_DIR.files() {
            let Some(name) = file.path().to_str() else { continue };
            let Some(source) = file.contents_utf8() else {
                return Err(format!("{name} is not valid UTF-8"));
            };
            env.add_template(name, source).map_err(|e| format!("{name}: {e}"))?;
        }
        Ok(env)
    })
    .as_ref()
    .map_err(|reason| AppError::PromptRender { template: "prompts".into(), reason: reason.clone() })
}

fn render(name: &str, ctx: Value) -> Result<String, AppError> {
    let env = environment()?;
    env.get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| AppError::PromptRender { template: name.to_string(), reason: e.to_string() })
}

/// Request for three candidate industries for `company_name`.
pub fn industry_prompt(company_name: &str) -> Result<String, AppError> {
    render(INDUSTRY_SUGGESTION, context! { company_name => company_name })
}

/// Cover letter request; the mode is decided by whether a template is present.
pub fn letter_prompt(details: &JobDetails, template: Option<&Template>) -> Result<String, AppError> {
    let job = Value::from_serialize(details);
    match template {
        Some(template) => {
            render(LETTER_TEMPLATE_FILL, context! { job => job, template => template.as_str() })
        }
        None => render(LETTER_FREE_GENERATION, context! { job => job }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> JobDetails {
        JobDetails {
            company_name: "Globex".into(),
            job_title: "Platform Engineer".into(),
            job_description: "Kubernetes, Terraform, on-call".into(),
            your_name: "Jordan Lee".into(),
            industry: "Energy".into(),
            email: "jordan@example.org".into(),
            phone: "+44 20 7946 0000".into(),
            city: "Leeds".into(),
            country: "United Kingdom".into(),
        }
    }

    fn field_values(details: &JobDetails) -> [&str; 9] {
        [
            details.company_name.as_str(),
            details.job_title.as_str(),
            details.job_description.as_str(),
            details.your_name.as_str(),
            details.industry.as_str(),
            details.email.as_str(),
            details.phone.as_str(),
            details.city.as_str(),
            details.country.as_str(),
        ]
    }

    #[test]
    fn template_mode_embeds_template_and_every_field() {
        let details = details();
        let template = Template::new("Dear [Hiring Manager],\nI want the [Job Title] role.");

        let prompt = letter_prompt(&details, Some(&template)).unwrap();

        assert!(prompt.contains("Template:"));
        assert!(prompt.contains(template.as_str()));
        for value in field_values(&details) {
            assert!(prompt.contains(value), "prompt is missing {value:?}");
        }
        assert!(prompt.contains("- Location: Leeds, United Kingdom"));
        assert!(prompt.contains("Do not add any text outside of the letter itself"));
    }

    #[test]
    fn free_mode_has_no_template_heading() {
        let details = details();
        let prompt = letter_prompt(&details, None).unwrap();

        assert!(!prompt.contains("Template:"));
        assert!(prompt.contains("~500 words"));
        assert!(prompt.contains("professional and enthusiastic"));
        for value in field_values(&details) {
            assert!(prompt.contains(value), "prompt is missing {value:?}");
        }
    }

    #[test]
    fn empty_template_still_selects_template_mode() {
        let prompt = letter_prompt(&details(), Some(&Template::new(""))).unwrap();
        assert!(prompt.contains("Template:"));
    }

    #[test]
    fn template_syntax_in_user_text_is_not_interpreted() {
        let template = Template::new("Hello {{ name }} {% if x %}y{% endif %}");
        let prompt = letter_prompt(&details(), Some(&template)).unwrap();
        assert!(prompt.contains("Hello {{ name }} {% if x %}y{% endif %}"));
    }

    #[test]
    fn industry_prompt_quotes_company_and_asks_for_numbered_list() {
        let prompt = industry_prompt("Initech").unwrap();
        assert!(prompt.contains("\"Initech\""));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn industry_prompt_accepts_empty_company() {
        assert!(industry_prompt("").unwrap().contains("\"\""));
    }

    #[test]
    fn default_template_has_bracketed_placeholders() {
        let template = Template::new(DEFAULT_LETTER_TEMPLATE);
        let placeholders = template.placeholders();
        assert!(placeholders.contains(&"[Company Name]"));
        assert!(placeholders.contains(&"[Job Title]"));
        assert!(placeholders.contains(&"[Your Name]"));
    }
}
