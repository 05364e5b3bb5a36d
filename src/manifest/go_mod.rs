//! go.mod parser
//!
//! Handles:
//! - require statements (single and block)
//! - `// indirect` markers
//! - replace, exclude, retract and other directives (skipped)

use crate::domain::Dependency;
use crate::error::ManifestError;
use crate::manifest::{ManifestParser, GO_MOD_FILENAME};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Parser for go.mod files
pub struct GoModParser;

// Opening line of a directive block: `require (`, `replace (`, ...
static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)\s*\(\s*$").unwrap());

static INDIRECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//\s*indirect\s*(;|$)").unwrap());

impl ManifestParser for GoModParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError> {
        let mut dependencies = Vec::new();
        // Directive of the block we are in, with the line it opened on
        let mut block: Option<(String, usize)> = None;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let (code, comment) = split_comment(line);
            let code = code.trim();

            if code.is_empty() {
                continue;
            }

            if let Some((directive, _)) = &block {
                if code == ")" {
                    block = None;
                    continue;
                }
                if directive == "require" {
                    dependencies.push(parse_requirement(code, comment, line_no)?);
                }
                continue;
            }

            if let Some(caps) = BLOCK_START_RE.captures(code) {
                block = Some((caps[1].to_string(), line_no));
                continue;
            }

            if let Some(rest) = code.strip_prefix("require") {
                if rest.starts_with(char::is_whitespace) {
                    dependencies.push(parse_requirement(rest.trim(), comment, line_no)?);
                    continue;
                }
            }

            trace!(line = line_no, "skipping go.mod line");
        }

        if let Some((directive, opened)) = block {
            return Err(ManifestError::go_mod_parse_error(
                GO_MOD_FILENAME,
                opened,
                format!("unterminated {} block", directive),
            ));
        }

        Ok(dependencies)
    }

    fn filename(&self) -> &'static str {
        GO_MOD_FILENAME
    }
}

/// Split a line into code and the trailing `//` comment, if any
///
/// `//` inside a quoted module path is not a comment.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '/' if !in_quotes && line[i + 1..].starts_with('/') => {
                return (&line[..i], Some(line[i..].trim()));
            }
            _ => {}
        }
    }
    (line, None)
}

fn parse_requirement(
    code: &str,
    comment: Option<&str>,
    line_no: usize,
) -> Result<Dependency, ManifestError> {
    let mut fields = code.split_whitespace();
    let (Some(path), Some(version), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ManifestError::go_mod_parse_error(
            GO_MOD_FILENAME,
            line_no,
            format!("expected `module version`, found '{}'", code),
        ));
    };

    let path = unquote(path);
    let indirect = comment.is_some_and(|c| INDIRECT_RE.is_match(c));

    Ok(Dependency::new(path, version, indirect))
}

fn unquote(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}
