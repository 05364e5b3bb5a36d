//! Ranked candidate set for a single module
//!
//! Turns the raw version list from the proxy into a descending, classified
//! sequence. Unparseable tokens and releases older than the baseline are
//! dropped; a classification failure on a surviving candidate is an internal
//! error and is returned to the caller.

use crate::error::{ClassificationError, ParseError};
use crate::version::{compare, Version};
use tracing::trace;

/// Candidates for one module, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVersions {
    versions: Vec<Version>,
    is_current: bool,
}

impl RankedVersions {
    /// True iff the top-ranked token is textually identical to the baseline token
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// True when no candidate survived parsing and filtering
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn into_versions(self) -> Vec<Version> {
        self.versions
    }
}

/// Build the ranked set for `baseline` from raw candidate tokens
///
/// The ranked set holds only versions at or above the baseline.
pub fn build_ranked<'a, I>(
    baseline: &Version,
    raw_candidates: I,
    skip_prerelease: bool,
) -> Result<RankedVersions, ClassificationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut versions = Vec::new();

    for raw in raw_candidates {
        let candidate = match Version::parse_against(raw, baseline) {
            Ok(v) => v,
            Err(ParseError::Unreconciled(e)) => return Err(e),
            Err(e) => {
                trace!(token = raw, error = %e, "dropping candidate");
                continue;
            }
        };

        if skip_prerelease && candidate.is_prerelease() {
            continue;
        }

        versions.push(candidate);
    }

    versions.sort_by(|a, b| compare(b, a));

    let is_current = versions
        .first()
        .is_some_and(|top| top.original == baseline.original);

    Ok(RankedVersions {
        versions,
        is_current,
    })
}

/// Convenience for a newline-separated list as returned by the module proxy
pub fn build_ranked_from_list(
    baseline: &Version,
    raw_list: &str,
    skip_prerelease: bool,
) -> Result<RankedVersions, ClassificationError> {
    build_ranked(baseline, raw_list.lines(), skip_prerelease)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Status;

    fn baseline(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    fn summary(ranked: &RankedVersions) -> Vec<(&str, Status)> {
        ranked
            .versions
            .iter()
            .map(|v| (v.original.as_str(), v.status.unwrap()))
            .collect()
    }

    #[test]
    fn test_ranks_and_classifies() {
        let base = baseline("v1.2.3");
        let ranked = build_ranked(
            &base,
            ["v1.2.3", "v1.3.0", "v2.0.0", "v1.2.4", "garbage", ""],
            true,
        )
        .unwrap();

        assert_eq!(
            summary(&ranked),
            vec![
                ("v2.0.0", Status::Major),
                ("v1.3.0", Status::Minor),
                ("v1.2.4", Status::Patch),
                ("v1.2.3", Status::Current),
            ]
        );
        assert!(!ranked.is_current());
    }

    #[test]
    fn test_single_matching_candidate_is_current() {
        let base = baseline("v1.2.3");
        let ranked = build_ranked(&base, ["v1.2.3"], true).unwrap();
        assert_eq!(summary(&ranked), vec![("v1.2.3", Status::Current)]);
        assert!(ranked.is_current());
    }

    #[test]
    fn test_current_uses_textual_equality() {
        let base = baseline("v1.2.3+build1");
        let ranked = build_ranked(&base, ["v1.2.3"], true).unwrap();
        assert_eq!(summary(&ranked), vec![("v1.2.3", Status::Current)]);
        assert!(!ranked.is_current());
    }

    #[test]
    fn test_empty_is_not_current() {
        let base = baseline("v1.2.3");
        let ranked = build_ranked(&base, ["", "junk"], true).unwrap();
        assert!(ranked.is_empty());
        assert!(!ranked.is_current());
    }

    #[test]
    fn test_skip_prerelease() {
        let base = baseline("v1.2.3");
        let list = ["v1.3.0-rc.1", "v1.2.4", "v1.3.0-beta"];

        let ranked = build_ranked(&base, list, true).unwrap();
        assert_eq!(summary(&ranked), vec![("v1.2.4", Status::Patch)]);

        let ranked = build_ranked(&base, list, false).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.versions[2].original, "v1.2.4");
        assert_eq!(ranked.versions[0].status, Some(Status::Minor));
    }

    #[test]
    fn test_release_outranks_prerelease_of_same_core() {
        let base = baseline("v1.0.0");
        let ranked = build_ranked(&base, ["v1.1.0-rc.1", "v1.1.0"], false).unwrap();
        assert_eq!(ranked.versions[0].original, "v1.1.0");
        assert_eq!(ranked.versions[1].original, "v1.1.0-rc.1");
    }

    #[test]
    fn test_drops_older_releases() {
        let base = baseline("v1.2.3");
        let ranked = build_ranked(&base, ["v1.1.5", "v0.9.9", "v1.2.2", "v1.2.5"], true).unwrap();
        assert_eq!(summary(&ranked), vec![("v1.2.5", Status::Patch)]);
    }

    #[test]
    fn test_older_major_with_higher_minor_is_dropped() {
        let base = baseline("v2.0.0");
        let ranked = build_ranked(&base, ["v1.5.0", "v1.9.9", "v2.0.1"], true).unwrap();
        assert_eq!(summary(&ranked), vec![("v2.0.1", Status::Patch)]);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let base = baseline("v1.0.0");
        let ranked = build_ranked(&base, ["v1.1.0", "v1.1.0"], true).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_from_proxy_list() {
        let base = baseline("v0.14.0");
        let ranked = build_ranked_from_list(&base, "v0.13.0\nv0.15.0\nv0.14.0\n", true).unwrap();
        assert_eq!(
            summary(&ranked),
            vec![("v0.15.0", Status::Minor), ("v0.14.0", Status::Current)]
        );
    }

    #[test]
    fn test_incompatible_flag_carried() {
        let base = baseline("v1.0.0");
        let ranked = build_ranked(&base, ["v3.0.0+incompatible", "v1.1.0"], true).unwrap();
        assert!(ranked.versions[0].incompatible);
        assert_eq!(ranked.versions[0].status, Some(Status::Major));
        assert!(!ranked.versions[1].incompatible);
    }
}
