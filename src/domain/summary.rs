//! Run summary types
//!
//! Collects the per-module reports of a single run in manifest order.

use super::ModuleReport;

/// All results of one check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Reports for modules with version data, in go.mod order
    pub modules: Vec<ModuleReport>,
    /// Modules whose proxy list yielded no usable version
    pub no_data: Vec<String>,
}

impl CheckSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module report
    pub fn add_module(&mut self, report: ModuleReport) {
        self.modules.push(report);
    }

    /// Records a module without version data
    pub fn add_no_data(&mut self, path: impl Into<String>) {
        self.no_data.push(path.into());
    }

    /// Modules whose top-ranked version differs from the declared one
    pub fn outdated(&self) -> impl Iterator<Item = &ModuleReport> {
        self.modules.iter().filter(|m| !m.is_current)
    }

    /// Returns the number of modules checked with version data
    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    /// Returns the number of outdated modules
    pub fn total_outdated(&self) -> usize {
        self.outdated().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    fn report(path: &str, is_current: bool) -> ModuleReport {
        ModuleReport::new(path, Version::parse("v1.0.0").unwrap(), is_current, Vec::new())
    }

    #[test]
    fn test_summary_new() {
        let summary = CheckSummary::new();
        assert_eq!(summary.total_modules(), 0);
        assert!(summary.no_data.is_empty());
    }

    #[test]
    fn test_outdated_filters_current() {
        let mut summary = CheckSummary::new();
        summary.add_module(report("github.com/a/one", true));
        summary.add_module(report("github.com/a/two", false));
        summary.add_no_data("github.com/a/three");

        assert_eq!(summary.total_modules(), 2);
        assert_eq!(summary.total_outdated(), 1);
        assert_eq!(summary.outdated().next().unwrap().path, "github.com/a/two");
        assert_eq!(summary.no_data, vec!["github.com/a/three"]);
    }
}
