//! Interactive console port.

use crate::domain::AppError;

/// Line-oriented console used by the interview and save flows.
pub trait Prompter {
    /// Print one line of output.
    fn say(&self, message: &str);

    /// Ask for a free-text answer. Empty answers are allowed.
    fn ask(&self, prompt: &str) -> Result<String, AppError>;

    /// Ask for free text, offering `default` when the user just presses enter.
    fn ask_with_default(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        let answer = self.ask(&format!("{prompt} [{default}]"))?;
        if answer.trim().is_empty() { Ok(default.to_string()) } else { Ok(answer) }
    }

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}
