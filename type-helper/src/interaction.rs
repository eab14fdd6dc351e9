//! Operator interaction

use std::collections::VecDeque;

use crate::error::InteractionError;

/// Asks the operator yes/no questions
pub trait Interaction {
    /// Block until the operator answers
    fn confirm(&mut self, prompt: &str) -> Result<bool, InteractionError>;
}

/// Answers every question with yes
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Interaction for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> Result<bool, InteractionError> {
        tracing::info!(prompt, "assuming yes");
        Ok(true)
    }
}

/// Replays scripted answers and records the prompts it was shown
///
/// Once the script runs out, `fallback` answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<bool>,
    fallback: bool,
    prompts: Vec<String>,
}

impl ScriptedInteraction {
    /// Answer with `answers` in order, then `false`
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback: false,
            prompts: Vec::new(),
        }
    }

    /// Always answer `answer`
    pub fn always(answer: bool) -> Self {
        Self {
            fallback: answer,
            ..Self::default()
        }
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, prompt: &str) -> Result<bool, InteractionError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers() {
        let mut interaction = ScriptedInteraction::new([true, false]);
        assert!(interaction.confirm("first?").unwrap());
        assert!(!interaction.confirm("second?").unwrap());
        assert!(!interaction.confirm("third?").unwrap());
        assert_eq!(interaction.prompts(), ["first?", "second?", "third?"]);
    }

    #[test]
    fn test_always() {
        let mut interaction = ScriptedInteraction::always(true);
        assert!(interaction.confirm("again?").unwrap());
        assert!(AssumeYes.confirm("sure?").unwrap());
    }
}
