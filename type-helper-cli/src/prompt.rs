//! Interactive confirmation prompts

use inquire::{Confirm, InquireError};
use type_helper::InteractionError;
use type_helper::interaction::Interaction;

/// Asks the operator on the terminal, defaulting to no
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompt;

impl Interaction for Prompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool, InteractionError> {
        match Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            // Esc declines this question only
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(InquireError::OperationInterrupted) => Err(InteractionError::Cancelled),
            Err(e) => Err(InteractionError::Failed(e.to_string())),
        }
    }
}
