//! Version token parser
//!
//! Accepted grammar: optional `v`, a required major segment, optional
//! `.minor` and `.patch`, an optional `-prerelease` and an optional
//! `+metadata`, both made of dot-separated identifiers. Missing minor and
//! patch segments default to 0.

use super::{classify, Version};
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?([0-9]+)(\.[0-9]+)?(\.[0-9]+)?(-([0-9A-Za-z\-]+(\.[0-9A-Za-z\-]+)*))?(\+([0-9A-Za-z\-]+(\.[0-9A-Za-z\-]+)*))?$",
    )
    .unwrap()
});

impl Version {
    /// Parse a raw version token on its own; `status` stays unset
    pub fn parse(raw: &str) -> Result<Version, ParseError> {
        let caps = VERSION_RE
            .captures(raw)
            .ok_or_else(|| ParseError::invalid_semver(raw))?;

        let segment = |idx: usize| {
            caps.get(idx)
                .map(|m| m.as_str().trim_start_matches('.'))
                .unwrap_or("")
        };

        let major = parse_segment(raw, segment(1))?;
        let minor = parse_optional_segment(raw, segment(2))?;
        let patch = parse_optional_segment(raw, segment(3))?;

        let pre_release = caps.get(5).map(|m| m.as_str()).unwrap_or("");
        let build_metadata = caps.get(8).map(|m| m.as_str()).unwrap_or("");

        if !pre_release.is_empty() {
            validate_prerelease(pre_release)?;
        }
        if !build_metadata.is_empty() {
            validate_metadata(build_metadata)?;
        }

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: if pre_release.is_empty() {
                Vec::new()
            } else {
                pre_release.split('.').map(str::to_string).collect()
            },
            build_metadata: build_metadata.to_string(),
            incompatible: raw.contains("incompatible"),
            original: raw.to_string(),
            status: None,
        })
    }

    /// Parse a raw token and classify it against `baseline`
    ///
    /// Tokens whose numeric core is below the baseline are rejected with
    /// [`ParseError::BelowBaseline`] before classification runs. Any
    /// classification failure after that is [`ParseError::Unreconciled`].
    pub fn parse_against(raw: &str, baseline: &Version) -> Result<Version, ParseError> {
        let mut version = Version::parse(raw)?;
        if version.triple() < baseline.triple() {
            return Err(ParseError::BelowBaseline {
                raw: raw.to_string(),
                baseline: baseline.original.clone(),
            });
        }
        version.status = Some(classify(baseline, &version)?);
        Ok(version)
    }
}

fn parse_segment(raw: &str, segment: &str) -> Result<u64, ParseError> {
    segment
        .parse::<u64>()
        .map_err(|source| ParseError::InvalidSegment {
            raw: raw.to_string(),
            segment: segment.to_string(),
            source,
        })
}

fn parse_optional_segment(raw: &str, segment: &str) -> Result<u64, ParseError> {
    if segment.is_empty() {
        Ok(0)
    } else {
        parse_segment(raw, segment)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn validate_prerelease(pre_release: &str) -> Result<(), ParseError> {
    for part in pre_release.split('.') {
        if part.chars().all(|c| c.is_ascii_digit()) {
            if part.len() > 1 && part.starts_with('0') {
                return Err(ParseError::LeadingZero {
                    segment: part.to_string(),
                });
            }
        } else if !part.chars().all(is_identifier_char) {
            return Err(ParseError::InvalidPrerelease {
                segment: part.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_metadata(metadata: &str) -> Result<(), ParseError> {
    match metadata.split('.').find(|part| !part.chars().all(is_identifier_char)) {
        Some(part) => Err(ParseError::InvalidMetadata {
            segment: part.to_string(),
        }),
        None => Ok(()),
    }
}
