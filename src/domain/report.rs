//! Per-module check result

use crate::version::Version;

/// Outcome of checking one module against the proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    /// Module path
    pub path: String,
    /// The declared version, parsed
    pub current: Version,
    /// Top-ranked candidate is textually identical to the declared version
    pub is_current: bool,
    /// Candidates newest first, each classified against `current`
    pub ranked: Vec<Version>,
}

impl ModuleReport {
    pub fn new(
        path: impl Into<String>,
        current: Version,
        is_current: bool,
        ranked: Vec<Version>,
    ) -> Self {
        Self {
            path: path.into(),
            current,
            is_current,
            ranked,
        }
    }
}
