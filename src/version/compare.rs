//! Ordering of parsed versions

use super::Version;
use std::cmp::Ordering;

/// Compare two versions by (major, minor, patch), then release over pre-release
///
/// Pre-release identifiers are not ordered against each other and build
/// metadata is ignored, so this is deliberately coarser than `PartialEq`.
/// Sort descending with `versions.sort_by(|a, b| compare(b, a))`.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.triple()
        .cmp(&b.triple())
        .then_with(|| b.is_prerelease().cmp(&a.is_prerelease()))
}
