//! Validate command implementation.
//!
//! The `probekit validate` command checks card numbers against the Luhn
//! checksum.

use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::luhn::DigitSequence;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut all_valid = true;

        for raw in &self.args.numbers {
            // Spaces and dashes are common grouping characters in pasted numbers.
            let number: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();

            match DigitSequence::parse(&number) {
                Ok(sequence) if sequence.is_valid() => ui.success(&format!("{} - valid", raw)),
                Ok(_) => {
                    all_valid = false;
                    ui.error(&format!("{} - invalid checksum", raw));
                }
                Err(e) => {
                    all_valid = false;
                    ui.error(&format!("{} - {}", raw, e));
                }
            }
        }

        if all_valid {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
