//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{ProbekitError, Result};
use crate::probe::ProbeSummary;

use super::{
    LineSpinner, OutputMode, ProbekitTheme, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Prefix of environment variables that answer prompts by key.
const PROMPT_ENV_PREFIX: &str = "PROBEKIT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `PROBEKIT_PROMPT_<KEY>` environment variables,
/// then from the prompt's default. Secret prompts never fall back to a
/// default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(PromptResult::String(value.clone()));
        }

        if !matches!(prompt.prompt_type, PromptType::Secret) {
            if let Some(default) = &prompt.default {
                return Ok(PromptResult::String(default.clone()));
            }
        }

        Err(ProbekitError::PromptUnavailable {
            key: prompt.key.clone(),
            hint: format!("set {}", env_key),
        })
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LineSpinner::new(std::io::stdout(), ProbekitTheme::plain()))
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn show_probe_summary(&mut self, summary: &ProbeSummary) {
        println!();
        println!("  ┌─ Summary Report ───────────────────");
        println!("  │ Total Checks: {}", summary.total);
        println!("  │ ✓ Passed: {}", summary.passed);
        println!("  │ ✗ Failed: {}", summary.failed);
        println!("  └────────────────────────────────────");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("length", "Card length", Some("16"));
        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result.as_string(), "16");
    }

    #[test]
    fn prompt_prefers_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("PROBEKIT_PROMPT_LENGTH".to_string(), "19".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let prompt = Prompt::input("length", "Card length", Some("16"));
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "19");
    }

    #[test]
    fn secret_prompt_without_override_fails() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let mut prompt = Prompt::secret("secret_key", "Secret key");
        prompt.default = Some("ignored".to_string());

        let err = ui.prompt(&prompt).unwrap_err();
        assert!(matches!(err, ProbekitError::PromptUnavailable { .. }));
        let msg = err.to_string();
        assert!(msg.contains("PROBEKIT_PROMPT_SECRET_KEY"));
        assert!(!msg.contains("Invalid configuration"));
    }

    #[test]
    fn prompt_without_default_fails() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("prefix", "Prefix", None);
        assert!(ui.prompt(&prompt).is_err());
    }
}
