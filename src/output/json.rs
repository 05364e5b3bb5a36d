//! JSON output formatter for machine processing
//!
//! Emits every module that has version data, including current ones, with
//! the versions the filter selected for it.

use crate::domain::ModuleReport;
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use crate::update::UpgradeFilter;
use crate::version::{Status, Version};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    filter: UpgradeFilter,
}

impl JsonFormatter {
    pub fn new(filter: UpgradeFilter) -> Self {
        Self { filter }
    }

    fn module_to_json<'a>(&self, module: &'a ModuleReport) -> JsonModule<'a> {
        let selection = self.filter.selection(&module.ranked);

        JsonModule {
            path: &module.path,
            current: &module.current.original,
            is_current: module.is_current,
            available: selection.versions.into_iter().map(JsonVersion::from).collect(),
            omitted: selection.omitted,
        }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    modules: Vec<JsonModule<'a>>,
    /// Modules the proxy had no usable versions for
    no_data: &'a [String],
    errors: Vec<String>,
}

#[derive(Serialize)]
struct JsonModule<'a> {
    path: &'a str,
    current: &'a str,
    is_current: bool,
    available: Vec<JsonVersion<'a>>,
    /// Eligible versions left out by `--max-versions`
    omitted: usize,
}

#[derive(Serialize)]
struct JsonVersion<'a> {
    version: &'a str,
    status: Option<Status>,
    incompatible: bool,
}

impl<'a> From<&'a Version> for JsonVersion<'a> {
    fn from(v: &'a Version) -> Self {
        Self {
            version: &v.original,
            status: v.status,
            incompatible: v.incompatible,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            modules: result
                .summary
                .modules
                .iter()
                .map(|m| self.module_to_json(m))
                .collect(),
            no_data: &result.summary.no_data,
            errors: result.errors.iter().map(|e| e.to_string()).collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
