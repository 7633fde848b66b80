//! The interactive cover letter session.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, CoverLetter};
use crate::ports::{CompletionClient, DocumentRenderer, Prompter};

use super::compose::compose_letter;
use super::interview::collect_job_details;
use super::save::offer_save;
use super::template::{TemplateDecision, decide_template};

const RULE_WIDTH: usize = 50;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A letter was generated; `saved` lists the files written.
    Generated { letter: CoverLetter, saved: Vec<PathBuf> },
    /// The user asked for a template that does not exist and chose not to continue.
    Aborted,
    /// The completion service failed; the user has been told.
    GenerationFailed,
}

/// Run interview, template decision, generation and save in order.
///
/// Generation and export failures are reported through the prompter and end
/// the session normally; only console failures are returned as errors.
pub fn run_session<C, P, R>(ctx: &AppContext<C, P, R>) -> Result<SessionOutcome, AppError>
where
    C: CompletionClient,
    P: Prompter,
    R: DocumentRenderer,
{
    let prompter = ctx.prompter();
    prompter.say("Welcome to the Cover Letter Generator!");

    let details = collect_job_details(ctx.client(), prompter)?;

    let template_config = &ctx.config().template;
    let decision = decide_template(
        prompter,
        &ctx.resolve(&template_config.path),
        &template_config.path,
        template_config.allow_no_template,
    )?;
    let template = match decision {
        TemplateDecision::Use(template) => Some(template),
        TemplateDecision::FreeGeneration => None,
        TemplateDecision::Abort => return Ok(SessionOutcome::Aborted),
    };

    let letter = match compose_letter(ctx.client(), &details, template.as_ref()) {
        Ok(letter) => letter,
        Err(err) => {
            tracing::error!(error = %err, "cover letter generation failed");
            prompter.say(&format!("An error occurred: {}", err));
            prompter.say("Please check your API key and internet connection.");
            return Ok(SessionOutcome::GenerationFailed);
        }
    };

    let rule = "=".repeat(RULE_WIDTH);
    prompter.say("\nGenerated Cover Letter:");
    prompter.say(&rule);
    prompter.say(letter.as_str());
    prompter.say(&rule);

    let saved = offer_save(prompter, ctx.renderer(), &letter, &details, ctx.root())?;
    Ok(SessionOutcome::Generated { letter, saved: saved.saved })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, ConfigFile};
    use crate::testing::{FakeCompletionClient, RecordingRenderer, ScriptedPrompter};
    use std::fs;
    use tempfile::TempDir;

    const INTERVIEW: [&str; 9] = [
        "Acme Rockets",
        "1",
        "Propulsion Engineer",
        "CFD, testing",
        "Ari Vance",
        "ari@example.com",
        "555-0142",
        "Mojave",
        "USA",
    ];

    fn context(
        dir: &TempDir,
        client: FakeCompletionClient,
        answers: Vec<&str>,
    ) -> AppContext<FakeCompletionClient, ScriptedPrompter, RecordingRenderer> {
        let config = AppConfig::from_parts(Some("k".into()), ConfigFile::default()).unwrap();
        AppContext::new(
            config,
            dir.path().to_path_buf(),
            client,
            ScriptedPrompter::new(answers),
            RecordingRenderer::new(),
        )
    }

    fn script(tail: &[&'static str]) -> Vec<&'static str> {
        INTERVIEW.iter().copied().chain(tail.iter().copied()).collect()
    }

    #[test]
    fn free_generation_then_pdf_save() {
        let dir = TempDir::new().unwrap();
        let client = FakeCompletionClient::new()
            .respond("1. Aerospace\n2. Defense\n3. Energy")
            .respond("Dear Acme,\n\nI build engines.");
        let ctx = context(&dir, client, script(&["no", "yes", "2", "ari"]));

        let outcome = run_session(&ctx).unwrap();

        match outcome {
            SessionOutcome::Generated { letter, saved } => {
                assert_eq!(letter.as_str(), "Dear Acme,\n\nI build engines.");
                assert_eq!(saved, [dir.path().join("ari.pdf")]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let prompts = ctx.client().prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("- Industry: Aerospace"));
        assert!(!prompts[1].contains("Template:"));

        let rendered = ctx.renderer().rendered();
        assert_eq!(rendered[0].0.paragraph_count(), 2);
        assert!(ctx.prompter().output_contains(&"=".repeat(50)));
    }

    #[test]
    fn template_fill_uses_file_from_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("template.txt"), "Dear [Company Name],").unwrap();
        let client = FakeCompletionClient::new().respond("1. A").respond("Dear Acme Rockets,");
        let ctx = context(&dir, client, script(&["yes", "no"]));

        let outcome = run_session(&ctx).unwrap();

        assert!(matches!(outcome, SessionOutcome::Generated { ref saved, .. } if saved.is_empty()));
        assert!(ctx.client().prompts()[1].contains("Template:\nDear [Company Name],"));
    }

    #[test]
    fn missing_template_abort_skips_generation() {
        let dir = TempDir::new().unwrap();
        let client = FakeCompletionClient::new().respond("1. A");
        let ctx = context(&dir, client, script(&["yes", "no"]));

        let outcome = run_session(&ctx).unwrap();

        assert_eq!(outcome, SessionOutcome::Aborted);
        assert_eq!(ctx.client().prompts().len(), 1);
    }

    #[test]
    fn missing_template_can_continue_without_one() {
        let dir = TempDir::new().unwrap();
        let client = FakeCompletionClient::new().respond("1. A").respond("Letter");
        let ctx = context(&dir, client, script(&["yes", "yes", "no"]));

        let outcome = run_session(&ctx).unwrap();

        assert!(matches!(outcome, SessionOutcome::Generated { .. }));
        assert!(!ctx.client().prompts()[1].contains("Template:"));
    }

    #[test]
    fn generation_failure_is_reported_gracefully() {
        let dir = TempDir::new().unwrap();
        let client = FakeCompletionClient::new().respond("1. A").fail("API key not valid");
        let ctx = context(&dir, client, script(&["no"]));

        let outcome = run_session(&ctx).unwrap();

        assert_eq!(outcome, SessionOutcome::GenerationFailed);
        assert!(ctx.prompter().output_contains("API key not valid"));
        assert!(ctx.prompter().output_contains("Please check your API key and internet connection."));
        assert_eq!(ctx.prompter().remaining(), 0);
    }

    #[test]
    fn closed_console_is_an_error() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir, FakeCompletionClient::new(), vec!["Acme"]);

        let err = run_session(&ctx).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }
}
