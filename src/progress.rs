//! Progress display for module checks
//!
//! Draws on stderr while go.mod is read and the proxy is queried, so that
//! stdout only carries the report. Disabled by `--quiet`.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const BAR_TEMPLATE: &str = "{spinner:.cyan} {msg:<40!} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress reporter for the check workflow
pub struct Progress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Show a spinner for an operation of unknown length
    pub fn spinner(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(SPINNER_TICKS);
        self.replace(ProgressBar::new_spinner().with_style(style), message, 80);
    }

    /// Start a bar counting `total` modules
    pub fn start(&mut self, total: u64, message: &str) {
        if !self.enabled || total == 0 {
            return;
        }

        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars(SPINNER_TICKS)
            .progress_chars("█▓▒░");
        self.replace(ProgressBar::new(total).with_style(style), message, 100);
    }

    fn replace(&mut self, bar: ProgressBar, message: &str, tick_ms: u64) {
        if let Some(old) = self.bar.take() {
            old.finish_and_clear();
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(tick_ms));
        self.bar = Some(bar);
    }

    /// Count one module as done
    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Remove the bar from the terminal
    pub fn finish_and_clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}
