//! Upgrade filter configuration
//!
//! This module provides the UpgradeFilter struct that narrows a ranked
//! candidate list down to the versions worth reporting.

use crate::error::ConfigError;
use crate::version::{Status, Version};
use std::fmt;
use std::str::FromStr;

/// Default number of versions reported per module
pub const DEFAULT_MAX_VERSIONS: usize = 15;

/// Set of upgrade severities allowed in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl SeverityFilter {
    /// Allow every upgrade severity
    pub fn all() -> Self {
        Self {
            major: true,
            minor: true,
            patch: true,
        }
    }

    /// Allow nothing; combine with the `with_*` builders
    pub fn none() -> Self {
        Self {
            major: false,
            minor: false,
            patch: false,
        }
    }

    pub fn with(mut self, status: Status) -> Self {
        match status {
            Status::Major => self.major = true,
            Status::Minor => self.minor = true,
            Status::Patch => self.patch = true,
            Status::Current => {}
        }
        self
    }

    /// Returns true if versions with this status may be reported
    pub fn allows(&self, status: Status) -> bool {
        match status {
            Status::Major => self.major,
            Status::Minor => self.minor,
            Status::Patch => self.patch,
            Status::Current => false,
        }
    }
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for SeverityFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::all());
        }

        s.split(',').try_fold(Self::none(), |filter, part| match part {
            "major" => Ok(filter.with(Status::Major)),
            "minor" => Ok(filter.with(Status::Minor)),
            "patch" => Ok(filter.with(Status::Patch)),
            _ => Err(ConfigError::InvalidFilter {
                value: s.to_string(),
            }),
        })
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Status::upgrades()
            .iter()
            .filter(|s| self.allows(**s))
            .map(Status::as_str)
            .collect();
        f.write_str(&names.join(","))
    }
}

/// Filter configuration for selecting reportable versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeFilter {
    /// Severities to report
    pub severities: SeverityFilter,
    /// Report `+incompatible` versions
    pub show_incompatible: bool,
    /// Upper bound on versions reported per module
    pub max_versions: usize,
}

/// Versions chosen for display and how many eligible ones were cut off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub versions: Vec<&'a Version>,
    pub omitted: usize,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl UpgradeFilter {
    /// Create a new UpgradeFilter with default settings (all severities, 15 versions)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set severities to report
    pub fn with_severities(mut self, severities: SeverityFilter) -> Self {
        self.severities = severities;
        self
    }

    /// Set whether incompatible versions are reported
    pub fn with_show_incompatible(mut self, show: bool) -> Self {
        self.show_incompatible = show;
        self
    }

    /// Set the per-module version cap
    pub fn with_max_versions(mut self, max: usize) -> Self {
        self.max_versions = max;
        self
    }

    /// Check whether a single ranked version may be reported
    pub fn is_eligible(&self, version: &Version) -> bool {
        let severity_ok = version.status.is_some_and(|s| self.severities.allows(s));
        severity_ok && (self.show_incompatible || !version.incompatible)
    }

    /// Eligible versions capped to `max_versions`, in ranked order, with a
    /// count of the eligible ones the cap cut off
    pub fn selection<'a>(&self, ranked: &'a [Version]) -> Selection<'a> {
        let eligible: Vec<&Version> = ranked.iter().filter(|v| self.is_eligible(v)).collect();
        let omitted = eligible.len().saturating_sub(self.max_versions);
        let versions = eligible.into_iter().take(self.max_versions).collect();
        Selection { versions, omitted }
    }
}

impl Default for UpgradeFilter {
    fn default() -> Self {
        Self {
            severities: SeverityFilter::all(),
            show_incompatible: false,
            max_versions: DEFAULT_MAX_VERSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::build_ranked;

    fn ranked(baseline: &str, list: &[&str]) -> Vec<Version> {
        let base = Version::parse(baseline).unwrap();
        build_ranked(&base, list.iter().copied(), true)
            .unwrap()
            .into_versions()
    }

    fn originals(selected: &[&Version]) -> Vec<String> {
        selected.iter().map(|v| v.original.clone()).collect()
    }

    fn selected(filter: &UpgradeFilter, ranked: &[Version]) -> Vec<String> {
        originals(&filter.selection(ranked).versions)
    }

    #[test]
    fn test_new_filter() {
        let filter = UpgradeFilter::new();
        assert_eq!(filter.severities, SeverityFilter::all());
        assert!(!filter.show_incompatible);
        assert_eq!(filter.max_versions, 15);
    }

    #[test]
    fn test_severity_filter_from_str() {
        let filter: SeverityFilter = "major,patch".parse().unwrap();
        assert!(filter.major);
        assert!(!filter.minor);
        assert!(filter.patch);

        assert_eq!("".parse::<SeverityFilter>().unwrap(), SeverityFilter::all());
        assert!("major,current".parse::<SeverityFilter>().is_err());
        assert!("major,".parse::<SeverityFilter>().is_err());
        assert!("MAJOR".parse::<SeverityFilter>().is_err());
    }

    #[test]
    fn test_severity_filter_display() {
        assert_eq!(SeverityFilter::all().to_string(), "major,minor,patch");
        assert_eq!(
            SeverityFilter::none().with(Status::Patch).to_string(),
            "patch"
        );
    }

    #[test]
    fn test_current_never_allowed() {
        assert!(!SeverityFilter::all().allows(Status::Current));
    }

    #[test]
    fn test_select_major_only_capped() {
        let list = ranked("v1.2.3", &["v1.2.3", "v1.3.0", "v2.0.0", "v1.2.4", "garbage", ""]);
        let filter = UpgradeFilter::new()
            .with_severities(SeverityFilter::none().with(Status::Major))
            .with_max_versions(1);

        assert_eq!(selected(&filter, &list), vec!["v2.0.0"]);
    }

    #[test]
    fn test_select_excludes_current() {
        let list = ranked("v1.2.3", &["v1.2.3", "v1.2.4"]);
        let filter = UpgradeFilter::new();
        assert_eq!(selected(&filter, &list), vec!["v1.2.4"]);
    }

    #[test]
    fn test_select_drops_incompatible_by_default() {
        let list = ranked("v1.0.0", &["v3.0.0+incompatible", "v2.0.0", "v1.1.0"]);
        let filter = UpgradeFilter::new()
            .with_severities(SeverityFilter::none().with(Status::Major));

        assert_eq!(selected(&filter, &list), vec!["v2.0.0"]);

        let filter = filter.with_show_incompatible(true);
        assert_eq!(
            selected(&filter, &list),
            vec!["v3.0.0+incompatible", "v2.0.0"]
        );
    }

    #[test]
    fn test_select_preserves_order() {
        let list = ranked("v1.0.0", &["v1.0.1", "v1.2.0", "v2.1.0", "v1.1.0"]);
        let filter = UpgradeFilter::new();
        assert_eq!(
            selected(&filter, &list),
            vec!["v2.1.0", "v1.2.0", "v1.1.0", "v1.0.1"]
        );
    }

    #[test]
    fn test_selection_counts_omitted() {
        let list = ranked("v1.0.0", &["v1.0.1", "v1.0.2", "v1.0.3", "v1.0.4"]);
        let filter = UpgradeFilter::new().with_max_versions(3);

        let selection = filter.selection(&list);
        assert_eq!(originals(&selection.versions), vec!["v1.0.4", "v1.0.3", "v1.0.2"]);
        assert_eq!(selection.omitted, 1);
        assert_eq!(list.iter().filter(|v| filter.is_eligible(v)).count(), 4);
    }

    #[test]
    fn test_selection_empty() {
        let list = ranked("v1.0.0", &["v1.0.0"]);
        let selection = UpgradeFilter::new().selection(&list);
        assert!(selection.is_empty());
        assert_eq!(selection.omitted, 0);
    }
}
