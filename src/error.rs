//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or parsing go.mod
//! - RegistryError: Issues talking to the module proxy (transport errors)
//! - ConfigError: Invalid CLI configuration
//! - ParseError: A version token that does not fit the version grammar
//! - ClassificationError: Internal disagreement between ordering and classification

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Module proxy related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal invariant violation, never caused by user input
    #[error("internal error: {0}")]
    Internal(#[from] ClassificationError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// go.mod parsing error
    #[error("failed to parse go.mod in {path} at line {line}: {message}")]
    GoModParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Errors related to module proxy communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Module not found in the proxy
    #[error("module '{package}' not found in {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch module '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Response body could not be read
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid severity filter
    #[error("invalid filter '{value}': `filter` can be made up only from `major`, `minor` and `patch` values")]
    InvalidFilter { value: String },

    /// Invalid proxy URL
    #[error("invalid proxy URL '{value}': expected an http(s) URL")]
    InvalidProxy { value: String },
}

/// Errors produced while parsing a single version token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token does not match the version grammar
    #[error("invalid semantic version: '{raw}'")]
    InvalidSemver { raw: String },

    /// A numeric segment does not fit in an unsigned 64-bit integer
    #[error("invalid segment '{segment}' in '{raw}': {source}")]
    InvalidSegment {
        raw: String,
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// A numeric pre-release identifier has a leading zero
    #[error("version segment '{segment}' starts with 0")]
    LeadingZero { segment: String },

    /// A pre-release identifier contains characters outside [A-Za-z0-9-]
    #[error("invalid pre-release string '{segment}'")]
    InvalidPrerelease { segment: String },

    /// A build metadata identifier contains characters outside [A-Za-z0-9-]
    #[error("invalid metadata string '{segment}'")]
    InvalidMetadata { segment: String },

    /// The numeric core is older than the baseline it was parsed against
    #[error("version '{raw}' is older than '{baseline}'")]
    BelowBaseline { raw: String, baseline: String },

    /// Classification against the baseline failed; a logic bug, not bad input
    #[error(transparent)]
    Unreconciled(#[from] ClassificationError),
}

impl ParseError {
    /// Creates a new InvalidSemver error
    pub fn invalid_semver(raw: impl Into<String>) -> Self {
        ParseError::InvalidSemver { raw: raw.into() }
    }
}

/// Raised when a candidate is neither equal to nor newer than the baseline
/// in any numeric segment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to reconcile version status of '{candidate}' against '{baseline}'")]
pub struct ClassificationError {
    pub baseline: String,
    pub candidate: String,
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new GoModParseError
    pub fn go_mod_parse_error(
        path: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        ManifestError::GoModParseError {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}
