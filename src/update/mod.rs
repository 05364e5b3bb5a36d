//! Upgrade detection for module dependencies
//!
//! This module provides:
//! - Ranked candidate sets built from the proxy's raw version list
//! - Upgrade filter configuration from CLI args
//! - The per-module checker that turns a dependency and a raw list into a report

mod collection;
mod filter;

pub use collection::{build_ranked, build_ranked_from_list, RankedVersions};
pub use filter::{SeverityFilter, Selection, UpgradeFilter, DEFAULT_MAX_VERSIONS};

use crate::domain::{Dependency, ModuleReport};
use crate::error::{ClassificationError, ParseError};
use crate::version::Version;
use tracing::debug;

/// Checks a single dependency against the versions published for it
#[derive(Debug, Clone, Copy)]
pub struct ModuleChecker {
    /// Drop pre-release candidates before ranking
    skip_prerelease: bool,
}

impl ModuleChecker {
    /// Create a new ModuleChecker
    pub fn new(skip_prerelease: bool) -> Self {
        Self { skip_prerelease }
    }

    /// Parse the declared version of a dependency
    ///
    /// Unlike candidate tokens, a malformed declared version is a hard
    /// failure for the dependency.
    pub fn baseline(&self, dependency: &Dependency) -> Result<Version, ParseError> {
        Version::parse(&dependency.version)
    }

    /// Rank the raw version list against `current`
    ///
    /// Returns `Ok(None)` when no candidate survived, which means no version
    /// data is available (not that the module is current).
    pub fn check(
        &self,
        dependency: &Dependency,
        current: Version,
        raw_list: &str,
    ) -> Result<Option<ModuleReport>, ClassificationError> {
        let ranked = build_ranked_from_list(&current, raw_list, self.skip_prerelease)?;

        if ranked.is_empty() {
            debug!(module = %dependency.path, "no usable versions in proxy list");
            return Ok(None);
        }

        debug!(
            module = %dependency.path,
            candidates = ranked.len(),
            is_current = ranked.is_current(),
            "ranked module versions"
        );

        Ok(Some(ModuleReport::new(
            &dependency.path,
            current,
            ranked.is_current(),
            ranked.into_versions(),
        )))
    }
}

impl Default for ModuleChecker {
    fn default() -> Self {
        Self::new(true)
    }
}
