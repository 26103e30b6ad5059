//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::ProbekitTheme;
use super::SpinnerHandle;

/// A spinner shown while a request is in flight.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: ProbekitTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: ProbekitTheme::detect(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

/// Spinner that skips the animation and writes only the final line.
///
/// Used where an animated spinner is unwanted: quiet mode on a terminal
/// and headless output.
pub struct LineSpinner<W: Write> {
    out: W,
    theme: ProbekitTheme,
}

impl<W: Write> LineSpinner<W> {
    /// Create a spinner writing its final line to `out`.
    pub fn new(out: W, theme: ProbekitTheme) -> Self {
        Self { out, theme }
    }
}

impl<W: Write> SpinnerHandle for LineSpinner<W> {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn finish_error(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_error(msg)).ok();
    }
}
