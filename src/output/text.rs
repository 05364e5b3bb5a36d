//! Text output formatter for human-readable display
//!
//! One line per module that has something to offer:
//! `<path> current: <version>; available: <v1>, <v2>, ...`

use crate::domain::ModuleReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::{paint_versions, OutputFormatter};
use crate::update::UpgradeFilter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    filter: UpgradeFilter,
    color: bool,
}

impl TextFormatter {
    pub fn new(filter: UpgradeFilter, color: bool) -> Self {
        Self { filter, color }
    }

    fn format_module(&self, module: &ModuleReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if module.is_current {
            return Ok(());
        }

        let selection = self.filter.selection(&module.ranked);
        if selection.is_empty() {
            return Ok(());
        }

        let available = paint_versions(&selection.versions, self.color);
        let current = module.current.original.as_str();

        if self.color {
            writeln!(
                writer,
                "{} current: {}; available: {}",
                module.path.cyan(),
                current.blue(),
                available
            )
        } else {
            writeln!(
                writer,
                "{} current: {}; available: {}",
                module.path, current, available
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for module in &result.summary.modules {
            self.format_module(module, writer)?;
        }
        Ok(())
    }
}
