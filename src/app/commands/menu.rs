use crate::domain::AppError;
use crate::ports::Prompter;

/// Read a 1-based menu choice in `1..=max`, re-prompting until the answer is valid.
///
/// Only console failures are returned as errors; bad input never is.
pub fn read_menu_choice(prompter: &impl Prompter, prompt: &str, max: usize) -> Result<usize, AppError> {
    loop {
        let answer = prompter.ask(prompt)?;
        match answer.trim().parse::<i64>() {
            Ok(choice) if choice >= 1 && choice as u64 <= max as u64 => return Ok(choice as usize),
            Ok(_) => prompter
                .say(&format!("Invalid choice. Please enter a number between 1 and {}.", max)),
            Err(_) => prompter.say("Please enter a valid number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;

    #[test]
    fn reprompts_until_valid() {
        let prompter = ScriptedPrompter::new(["abc", "5", "2"]);

        let choice = read_menu_choice(&prompter, "Enter your choice (1-4)", 4).unwrap();

        assert_eq!(choice, 2);
        assert_eq!(prompter.asked().len(), 3);
        assert_eq!(
            prompter.output(),
            ["Please enter a valid number.", "Invalid choice. Please enter a number between 1 and 4."]
        );
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        let prompter = ScriptedPrompter::new([" 3 "]);
        assert_eq!(read_menu_choice(&prompter, "pick", 3).unwrap(), 3);
    }

    #[test]
    fn zero_and_negative_are_out_of_range() {
        let prompter = ScriptedPrompter::new(["0", "-1", "1"]);
        assert_eq!(read_menu_choice(&prompter, "pick", 3).unwrap(), 1);
        assert_eq!(prompter.output().len(), 2);
        assert!(prompter.output_contains("between 1 and 3"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let prompter = ScriptedPrompter::new(["x"]);
        let err = read_menu_choice(&prompter, "pick", 4).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }
}
