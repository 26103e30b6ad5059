//! Interactive menu.
//!
//! `probekit` with no subcommand (or `probekit menu`) loops over three
//! actions until the user exits: probe a key, generate a card batch, exit.
//! Bad input is reported and the menu is shown again.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::ProbekitConfig;
use crate::error::Result;
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::generate::BatchRequest;
use super::probe::{ProbeCommand, SECRET_KEY_PROMPT};

/// Prompt key for the menu choice.
pub const ACTION_PROMPT: &str = "action";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Probe,
    Generate,
    Exit,
}

impl MenuAction {
    /// Parse a select value or the numeric choice shown next to it.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" | "probe" => Some(Self::Probe),
            "2" | "generate" => Some(Self::Generate),
            "3" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    fn options() -> Vec<PromptOption> {
        vec![
            PromptOption::new("1. Secret key capability check", "probe"),
            PromptOption::new("2. Card generator", "generate"),
            PromptOption::new("3. Exit", "exit"),
        ]
    }
}

/// The menu command implementation.
pub struct MenuCommand {
    project_root: PathBuf,
    config: ProbekitConfig,
}

impl MenuCommand {
    /// Create a new menu command.
    pub fn new(project_root: &Path, config: &ProbekitConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
        }
    }

    fn run_probe(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let answer = ui.prompt(&Prompt::secret(
            SECRET_KEY_PROMPT,
            "Enter the secret key (sk_live_...)",
        ))?;
        let key = answer.as_string();
        let key = key.trim();
        if key.is_empty() {
            ui.error("No secret key provided");
            return Ok(());
        }

        let probe = ProbeCommand::new(&self.project_root, &self.config, ProbeArgs::default());
        if let Err(e) = probe.probe_key(key, ui) {
            ui.error(&format!("Probe failed: {}", e));
        }
        Ok(())
    }

    fn run_generate(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let defaults = BatchRequest::from_settings(&self.config.generator);

        let Some(count) = prompt_number(
            ui,
            "count",
            "Number of cards to generate (max 50)",
            defaults.count,
        )?
        else {
            return Ok(());
        };
        let prefix = ui
            .prompt(&Prompt::input(
                "prefix",
                "Card prefix",
                Some(defaults.prefix.as_str()),
            ))?
            .as_string();
        let Some(length) = prompt_number(ui, "length", "Card length", defaults.length)? else {
            return Ok(());
        };

        let request = BatchRequest {
            count,
            prefix: prefix.trim().to_string(),
            length,
            ..defaults
        };

        ui.show_header("Generated Cards");
        if let Err(e) = request.run(ui) {
            ui.error(&e.to_string());
        }
        Ok(())
    }
}

/// Ask for a non-negative integer; `None` after reporting bad input.
fn prompt_number(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    default: usize,
) -> Result<Option<usize>> {
    let default = default.to_string();
    let answer = ui
        .prompt(&Prompt::input(key, question, Some(default.as_str())))?
        .as_string();
    let answer = answer.trim();
    let answer = if answer.is_empty() {
        default.as_str()
    } else {
        answer
    };

    match answer.parse::<usize>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            ui.error(&format!("Invalid number: '{}'", answer));
            Ok(None)
        }
    }
}

impl Command for MenuCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error(
                "The menu needs an interactive terminal; use 'probekit probe' or 'probekit generate'",
            );
            return Ok(CommandResult::failure(2));
        }

        loop {
            ui.show_header("probekit");
            let choice = ui
                .prompt(&Prompt::select(
                    ACTION_PROMPT,
                    "Please choose an option",
                    MenuAction::options(),
                ))?
                .as_string();

            match MenuAction::parse(&choice) {
                Some(MenuAction::Probe) => self.run_probe(ui)?,
                Some(MenuAction::Generate) => self.run_generate(ui)?,
                Some(MenuAction::Exit) => {
                    ui.message("Goodbye!");
                    return Ok(CommandResult::success());
                }
                None => ui.error("Invalid choice. Please select a valid option."),
            }
        }
    }
}
