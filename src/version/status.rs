//! Upgrade severity of a candidate relative to a baseline

use super::Version;
use crate::error::ClassificationError;
use serde::Serialize;
use std::fmt;

/// Relationship between a candidate version and the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Same major, minor and patch as the baseline
    Current,
    /// Newer patch release
    Patch,
    /// Newer minor release
    Minor,
    /// Newer major release
    Major,
}

impl Status {
    /// Lowercase name used in filters and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Current => "current",
            Status::Patch => "patch",
            Status::Minor => "minor",
            Status::Major => "major",
        }
    }

    /// Severities that can be selected for reporting
    pub fn upgrades() -> &'static [Status] {
        &[Status::Major, Status::Minor, Status::Patch]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `candidate` against `baseline`
///
/// Rules are checked in order: equal numeric core, then the first of
/// major/minor/patch that is larger on the candidate. A candidate that is
/// older in every differing segment cannot be reconciled.
pub fn classify(baseline: &Version, candidate: &Version) -> Result<Status, ClassificationError> {
    if baseline.triple() == candidate.triple() {
        Ok(Status::Current)
    } else if candidate.major > baseline.major {
        Ok(Status::Major)
    } else if candidate.minor > baseline.minor {
        Ok(Status::Minor)
    } else if candidate.patch > baseline.patch {
        Ok(Status::Patch)
    } else {
        Err(ClassificationError {
            baseline: baseline.original.clone(),
            candidate: candidate.original.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::compare;
    use rstest::rstest;
    use std::cmp::Ordering;

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    #[rstest]
    #[case("v1.2.3", "v1.2.3", Status::Current)]
    #[case("v1.2.3", "v1.2.3-rc.1", Status::Current)]
    #[case("v1.2.3", "v1.2.3+build", Status::Current)]
    #[case("v1.2.3", "v1.2.4", Status::Patch)]
    #[case("v1.2.3", "v1.3.0", Status::Minor)]
    #[case("v1.2.3", "v1.3.5", Status::Minor)]
    #[case("v1.2.3", "v2.0.0", Status::Major)]
    #[case("v1.2.3", "v2.5.9", Status::Major)]
    #[case("v1", "v1.0.1", Status::Patch)]
    fn test_classify(#[case] baseline: &str, #[case] candidate: &str, #[case] expected: Status) {
        assert_eq!(classify(&v(baseline), &v(candidate)).unwrap(), expected);
    }

    #[rstest]
    #[case("v1.2.3", "v1.2.2")]
    #[case("v1.2.3", "v1.1.0")]
    #[case("v2.0.0", "v1.0.0")]
    fn test_classify_older_fails(#[case] baseline: &str, #[case] candidate: &str) {
        let err = classify(&v(baseline), &v(candidate)).unwrap_err();
        assert_eq!(err.baseline, baseline);
        assert_eq!(err.candidate, candidate);
    }

    #[test]
    fn test_classify_covers_every_newer_candidate() {
        let raw = [
            "v0.0.1", "v0.1.0", "v1.0.0", "v1.0.1", "v1.1.0", "v1.1.1", "v2.0.0", "v2.3.4",
            "v10.0.0",
        ];
        for baseline in raw.iter().map(|s| v(s)) {
            for candidate in raw.iter().map(|s| v(s)) {
                if compare(&candidate, &baseline) != Ordering::Greater {
                    continue;
                }
                let expected = if candidate.major != baseline.major {
                    Status::Major
                } else if candidate.minor != baseline.minor {
                    Status::Minor
                } else {
                    Status::Patch
                };
                assert_eq!(classify(&baseline, &candidate).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Major).unwrap(), "\"major\"");
        assert_eq!(Status::Patch.to_string(), "patch");
    }

    #[test]
    fn test_upgrades_excludes_current() {
        assert!(!Status::upgrades().contains(&Status::Current));
        assert_eq!(Status::upgrades().len(), 3);
    }
}
