//! Probe command implementation.
//!
//! The `probekit probe` command checks which API capabilities a secret key
//! grants and exits non-zero unless every check passed.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::ProbekitConfig;
use crate::error::Result;
use crate::probe::{
    AuditLog, CapabilityProber, Endpoint, KeyKind, ProbeObserver, ProbeResult, ProbeSummary,
};
use crate::ui::{OutputMode, Prompt, SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Prompt key for the secret key; answered by `PROBEKIT_PROMPT_SECRET_KEY`
/// in non-interactive mode.
pub const SECRET_KEY_PROMPT: &str = "secret_key";

/// Shows a spinner per endpoint and a ✓/✗ line once it resolves.
struct SpinnerObserver<'a> {
    ui: &'a mut dyn UserInterface,
    spinner: Option<Box<dyn SpinnerHandle>>,
}

impl ProbeObserver for SpinnerObserver<'_> {
    fn on_probe_start(&mut self, index: usize, total: usize, endpoint: &Endpoint) {
        self.spinner = Some(self.ui.start_spinner(&format!(
            "[{}/{}] {}",
            index + 1,
            total,
            endpoint.name
        )));
    }

    fn on_probe_finish(&mut self, _index: usize, _total: usize, result: &ProbeResult) {
        let line = format!("{} - {}", result.name, result.outcome);
        let mut spinner = match self.spinner.take() {
            Some(spinner) => spinner,
            None => self.ui.start_spinner(&result.name),
        };
        if result.outcome.is_pass() {
            spinner.finish_success(&line);
        } else {
            spinner.finish_error(&line);
        }
    }
}

/// The probe command implementation.
pub struct ProbeCommand {
    project_root: PathBuf,
    config: ProbekitConfig,
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(project_root: &Path, config: &ProbekitConfig, args: ProbeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProbeArgs {
        &self.args
    }

    /// API base after applying the `--api-base` override.
    pub fn api_base(&self) -> &str {
        self.args
            .api_base
            .as_deref()
            .unwrap_or(&self.config.probe.api_base)
    }

    /// Audit log destination, or `None` when auditing is off.
    ///
    /// Relative paths resolve against the project root.
    pub fn audit_path(&self) -> Option<PathBuf> {
        if self.args.no_audit || !self.config.audit.enabled {
            return None;
        }
        Some(self.project_root.join(&self.config.audit.path))
    }

    /// Probe `key` against every endpoint and show the results.
    pub fn probe_key(&self, key: &str, ui: &mut dyn UserInterface) -> Result<ProbeSummary> {
        let log = match self.audit_path() {
            Some(path) => AuditLog::new(path),
            None => AuditLog::disabled(),
        };
        let mut prober = CapabilityProber::new(log)?.with_api_base(self.api_base());

        ui.show_header(&format!(
            "Key Type Detected: {}",
            KeyKind::classify(key).label()
        ));
        ui.message("Verifying Secret Key Abilities:");

        let report = {
            let mut observer = SpinnerObserver {
                ui: &mut *ui,
                spinner: None,
            };
            prober.probe_with(key, &mut observer)
        };

        let summary = report.summary();
        ui.show_probe_summary(&summary);

        if ui.output_mode() == OutputMode::Verbose {
            if let Some(path) = prober.log().path() {
                ui.message(&format!("Audit log: {}", path.display()));
            }
        }

        Ok(summary)
    }

    fn resolve_key(&self, ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(key) = &self.args.key {
            return Ok(key.clone());
        }
        let answer = ui.prompt(&Prompt::secret(
            SECRET_KEY_PROMPT,
            "Enter the secret key (sk_live_...)",
        ))?;
        Ok(answer.as_string())
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let key = self.resolve_key(ui)?;
        let key = key.trim();
        if key.is_empty() {
            ui.error("No secret key provided");
            return Ok(CommandResult::failure(2));
        }

        let summary = self.probe_key(key, ui)?;
        if summary.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, SpinnerStatus};

    const REFUSED: &str = "http://127.0.0.1:1/v1";

    fn command(args: ProbeArgs) -> ProbeCommand {
        ProbeCommand::new(Path::new("/project"), &ProbekitConfig::default(), args)
    }

    #[test]
    fn api_base_flag_overrides_config() {
        let cmd = command(ProbeArgs {
            api_base: Some("http://localhost:9/v1".to_string()),
            ..Default::default()
        });
        assert_eq!(cmd.api_base(), "http://localhost:9/v1");
        assert_eq!(command(ProbeArgs::default()).api_base(), "https://api.stripe.com/v1");
    }

    #[test]
    fn audit_path_resolves_against_project_root() {
        let cmd = command(ProbeArgs::default());
        assert_eq!(
            cmd.audit_path(),
            Some(PathBuf::from("/project/probekit.log"))
        );
    }

    #[test]
    fn audit_can_be_disabled() {
        let cmd = command(ProbeArgs {
            no_audit: true,
            ..Default::default()
        });
        assert_eq!(cmd.audit_path(), None);

        let mut config = ProbekitConfig::default();
        config.audit.enabled = false;
        let cmd = ProbeCommand::new(Path::new("/project"), &config, ProbeArgs::default());
        assert_eq!(cmd.audit_path(), None);
    }

    #[test]
    fn unreachable_api_fails_every_check() {
        let cmd = command(ProbeArgs {
            key: Some("sk_test_abcdefghijkl".to_string()),
            api_base: Some(REFUSED.to_string()),
            no_audit: true,
        });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Verifying Secret Key Abilities"));
        assert_eq!(ui.headers(), ["Key Type Detected: Test Key"]);
        assert_eq!(ui.spinners().len(), 7);
        assert_eq!(ui.spinners()[0], "[1/7] Charges Access");

        let finishes = ui.spinner_finishes();
        assert_eq!(finishes.len(), 7);
        assert!(finishes
            .iter()
            .all(|(status, _)| *status == SpinnerStatus::Error));
        assert!(finishes[6].1.starts_with("Disputes Access - Network error"));

        let summary = ui.summaries()[0];
        assert_eq!((summary.total, summary.passed, summary.failed), (7, 0, 7));
    }

    #[test]
    fn key_is_prompted_when_missing() {
        let cmd = command(ProbeArgs {
            api_base: Some(REFUSED.to_string()),
            no_audit: true,
            ..Default::default()
        });
        let mut ui = MockUI::new();
        ui.set_prompt_response(SECRET_KEY_PROMPT, "sk_live_abcdefghijkl");

        cmd.execute(&mut ui).unwrap();
        assert_eq!(ui.prompts_shown(), [SECRET_KEY_PROMPT]);
        assert_eq!(ui.headers(), ["Key Type Detected: Live Key"]);
    }

    #[test]
    fn blank_key_is_rejected() {
        let cmd = command(ProbeArgs {
            key: Some("   ".to_string()),
            ..Default::default()
        });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("No secret key"));
        assert!(ui.spinners().is_empty());
    }
}
