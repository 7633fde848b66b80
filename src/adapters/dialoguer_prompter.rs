//! Terminal prompter backed by dialoguer.

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Console prompter. Uses dialoguer widgets on a terminal and plain
/// line-by-line reads from stdin otherwise, so answers can be piped in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }

    fn read_piped(prompt: &str) -> Result<String, AppError> {
        let mut stdout = std::io::stdout().lock();
        read_answer(&mut std::io::stdin().lock(), &mut stdout, prompt)
    }
}

/// Print `prompt` and read one line. End of input is an error.
fn read_answer(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<String, AppError> {
    write!(writer, "{}: ", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| AppError::Input(format!("Failed to read answer: {}", e)))?;
    if read == 0 {
        return Err(AppError::Input("end of input".to_string()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl Prompter for DialoguerPrompter {
    fn say(&self, message: &str) {
        println!("{}", message);
    }

    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        if !Self::interactive() {
            return Self::read_piped(prompt);
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::Input(e.to_string()))
    }

    fn ask_with_default(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        if !Self::interactive() {
            let answer = Self::read_piped(&format!("{prompt} [{default}]"))?;
            return Ok(if answer.trim().is_empty() { default.to_string() } else { answer });
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| AppError::Input(e.to_string()))
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        if !Self::interactive() {
            return Self::read_piped(&format!("{prompt} (yes/no)")).map(|answer| is_yes(&answer));
        }
        Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| AppError::Input(e.to_string()))
    }
}
