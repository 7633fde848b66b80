use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter fed from a fixed script of answers.
///
/// Text answers and yes/no answers share one queue; a confirm consumes the next
/// entry and treats `yes`/`y` as true. Running out of answers behaves like a
/// closed terminal.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
    output: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.borrow().iter().any(|line| line.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<String, AppError> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Input(format!("script exhausted at '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }

    fn ask(&self, prompt: &str) -> Result<String, AppError> {
        self.next(prompt)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        let answer = self.next(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
    }
}
