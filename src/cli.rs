//! CLI argument parsing module for modcheck

use crate::error::ConfigError;
use crate::output::OutputFormat;
use crate::update::{SeverityFilter, UpgradeFilter, DEFAULT_MAX_VERSIONS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal width assumed when stdout is not a terminal
pub const FALLBACK_TERMINAL_WIDTH: usize = 120;

/// Width taken by the `#`, Dependency and Current Version columns plus borders
const FIXED_COLUMNS_WIDTH: usize = 63;

/// Width budgeted per version in the Available Versions column
const VERSION_CELL_WIDTH: usize = 10;

/// Parse a `--filter` value such as `major,patch`
fn parse_filter(s: &str) -> Result<SeverityFilter, ConfigError> {
    s.parse()
}

/// Check Go module dependencies for newer versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modcheck",
    version,
    about = "Check Go module dependencies for newer versions"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing go.mod (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Selection options
    /// Maximum number of versions shown per module
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_VERSIONS as u64,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub max_versions: u64,

    /// Upgrade kinds to show, comma separated (major, minor, patch)
    #[arg(long, global = true, default_value = "major,minor,patch", value_parser = parse_filter)]
    pub filter: SeverityFilter,

    /// Show +incompatible versions
    #[arg(long, global = true)]
    pub show_incompatible: bool,

    /// Check only this module
    #[arg(long, global = true, value_name = "MODULE")]
    pub dependency: Option<String>,

    /// Consider pre-release versions
    #[arg(long, global = true)]
    pub include_prerelease: bool,

    // Output options
    /// Render results as a table
    #[arg(long, global = true, conflicts_with = "json")]
    pub pretty: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Versions per table line (default: derived from terminal width)
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub per_row: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    // Network options
    /// Module proxy URL or GOPROXY-style list
    #[arg(long, global = true, env = "GOPROXY", value_name = "URL")]
    pub proxy: Option<String>,

    /// Maximum concurrent proxy requests
    #[arg(short = 'j', long, global = true, default_value_t = 10)]
    pub jobs: usize,

    // General options
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List direct module dependencies
    Show {
        /// Only list modules that have a newer version
        #[arg(long)]
        old: bool,
    },
}

impl CliArgs {
    /// Build the version filter from CLI arguments
    pub fn upgrade_filter(&self) -> UpgradeFilter {
        UpgradeFilter::new()
            .with_severities(self.filter)
            .with_show_incompatible(self.show_incompatible)
            .with_max_versions(self.max_versions as usize)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.pretty, self.json)
    }

    /// Versions per table line, from `--per-row` or the terminal width
    pub fn versions_per_row(&self) -> usize {
        match self.per_row {
            Some(n) => n as usize,
            None => versions_per_row_for_width(terminal_width()),
        }
    }

    pub fn use_color(&self) -> bool {
        !self.no_color
    }
}

/// Width of the terminal attached to stdout
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// How many versions fit on one table line at `width` columns
pub fn versions_per_row_for_width(width: usize) -> usize {
    (width.saturating_sub(FIXED_COLUMNS_WIDTH) / VERSION_CELL_WIDTH).max(1)
}
