//! Output formatting for check results
//!
//! This module provides:
//! - One-line-per-module text output
//! - Aligned table output (`--pretty`)
//! - JSON output for machine processing
//! - Plain module listing for the `show` subcommand

mod json;
mod list;
mod table;
mod text;

pub use json::JsonFormatter;
pub use list::ListFormatter;
pub use table::{layout_rows, TableFormatter, TableRow};
pub use text::TextFormatter;

use crate::orchestrator::OrchestratorResult;
use crate::update::UpgradeFilter;
use crate::version::{Status, Version};
use colored::Colorize;
use std::io::Write;

/// Versions per table line when the terminal width is unknown
pub const DEFAULT_VERSIONS_PER_ROW: usize = 6;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per module
    #[default]
    Text,
    /// Aligned table
    Table,
    /// JSON output for machine processing
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--pretty` / `--json` flags
    pub fn from_flags(pretty: bool, json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if pretty {
            OutputFormat::Table
        } else {
            OutputFormat::Text
        }
    }
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Selects which ranked versions are shown
    pub filter: UpgradeFilter,
    /// Versions per table line
    pub per_row: usize,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            filter: UpgradeFilter::default(),
            per_row: DEFAULT_VERSIONS_PER_ROW,
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: OutputFormat, filter: UpgradeFilter) -> Self {
        Self {
            format,
            filter,
            ..Self::default()
        }
    }

    pub fn with_per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row.max(1);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the orchestrator result
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(config.filter, config.color)),
        OutputFormat::Table => Box::new(TableFormatter::new(
            config.filter,
            config.per_row,
            config.color,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.filter)),
    }
}

/// Version text colored by its status
///
/// Patch is green, minor yellow, major red, anything else blue.
pub(crate) fn paint_version(version: &Version, color: bool) -> String {
    if !color {
        return version.original.clone();
    }

    let text = version.original.as_str();
    match version.status {
        Some(Status::Patch) => text.green(),
        Some(Status::Minor) => text.yellow(),
        Some(Status::Major) => text.red(),
        _ => text.blue(),
    }
    .to_string()
}

/// Join versions with `, `, coloring each one
pub(crate) fn paint_versions(versions: &[&Version], color: bool) -> String {
    versions
        .iter()
        .map(|v| paint_version(v, color))
        .collect::<Vec<_>>()
        .join(", ")
}
