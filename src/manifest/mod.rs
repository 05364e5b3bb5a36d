//! Manifest reading and parsing
//!
//! This module provides functionality to:
//! - Locate go.mod in a project directory
//! - Parse the declared requirements from it

mod go_mod;

pub use go_mod::GoModParser;

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the Go module manifest
pub const GO_MOD_FILENAME: &str = "go.mod";

/// Trait for parsing manifest files
pub trait ManifestParser {
    /// Parse dependencies from a manifest file
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError>;

    /// File name this parser handles
    fn filename(&self) -> &'static str;
}

/// Path of the manifest inside `dir`
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(GO_MOD_FILENAME)
}

/// Read the raw content of a manifest file
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Read and parse the go.mod in `dir`
pub fn load_dependencies(dir: &Path) -> Result<Vec<Dependency>, ManifestError> {
    let path = manifest_path(dir);
    let content = read_manifest(&path)?;

    let dependencies = GoModParser.parse(&content).map_err(|e| match e {
        ManifestError::GoModParseError { line, message, .. } => {
            ManifestError::go_mod_parse_error(&path, line, message)
        }
        other => other,
    })?;

    debug!(path = %path.display(), count = dependencies.len(), "parsed manifest");
    Ok(dependencies)
}
