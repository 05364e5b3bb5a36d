//! Module listing for the `show` subcommand

use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// Prints module paths one per line, then the entry count
pub struct ListFormatter {
    /// Only list modules with a newer version
    old_only: bool,
}

impl ListFormatter {
    pub fn new(old_only: bool) -> Self {
        Self { old_only }
    }
}

impl OutputFormatter for ListFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let mut count = 0;

        for module in &result.summary.modules {
            if self.old_only && module.is_current {
                continue;
            }
            writeln!(writer, "{}", module.path)?;
            count += 1;
        }

        writeln!(writer, "Total entries: {}", count)
    }
}
