//! Confirmation prompts for destructive operations.
//!
//! Deleting a recipe or clearing the whole box asks a [`Confirm`] first. The CLI answers
//! from stdin, tests and `--yes` runs answer up front. Any `FnMut(&str) -> bool` closure
//! works as a confirmer.

/// A synchronous yes/no prompt.
pub trait Confirm {
    /// Shows `prompt` and returns whether the user accepted.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Pre-confirmed: accepts every prompt without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_receive_the_prompt() {
        let mut seen = Vec::new();
        let mut confirmer = |prompt: &str| {
            seen.push(prompt.to_string());
            false
        };
        assert!(!confirmer.confirm("Delete?"));
        assert_eq!(seen, vec!["Delete?".to_string()]);
    }

    #[test]
    fn fixed_answers() {
        assert!(AssumeYes.confirm("anything"));
        assert!(!AssumeNo.confirm("anything"));
    }
}
