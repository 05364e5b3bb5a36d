//! Version model for Go module versions
//!
//! This module provides:
//! - Parsing of loosely-structured version tokens (`v1`, `v1.2.3-rc.1+meta`)
//! - A total order over parsed versions (major, minor, patch, release flag)
//! - Classification of a candidate relative to a baseline (major/minor/patch)

mod compare;
mod parser;
mod status;

pub use compare::compare;
pub use status::{classify, Status};

use std::fmt;

/// A parsed module version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated pre-release identifiers; non-empty means pre-release
    pub pre_release: Vec<String>,
    /// Opaque build metadata, excluded from ordering
    pub build_metadata: String,
    /// The raw token contains the literal `incompatible`
    pub incompatible: bool,
    /// The raw token exactly as received
    pub original: String,
    /// Relationship to the baseline this version was parsed against
    pub status: Option<Status>,
}

impl Version {
    /// Returns true if this version carries pre-release identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Numeric core as a tuple
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
