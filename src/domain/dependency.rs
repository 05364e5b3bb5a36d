//! Dependency entries declared in go.mod

use std::fmt;

/// A `require` entry from go.mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Module path
    pub path: String,
    /// Declared version token, verbatim
    pub version: String,
    /// Marked `// indirect`
    pub indirect: bool,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(path: impl Into<String>, version: impl Into<String>, indirect: bool) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            indirect,
        }
    }

    /// Creates a direct requirement
    pub fn direct(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(path, version, false)
    }

    /// Creates an indirect requirement
    pub fn indirect(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(path, version, true)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.indirect { " // indirect" } else { "" };
        write!(f, "{} {}{}", self.path, self.version, marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_direct() {
        let dep = Dependency::direct("github.com/gin-gonic/gin", "v1.9.1");
        assert_eq!(dep.path, "github.com/gin-gonic/gin");
        assert_eq!(dep.version, "v1.9.1");
        assert!(!dep.indirect);
    }

    #[test]
    fn test_dependency_indirect() {
        let dep = Dependency::indirect("golang.org/x/text", "v0.14.0");
        assert!(dep.indirect);
    }

    #[test]
    fn test_dependency_display() {
        assert_eq!(
            Dependency::direct("github.com/a/b", "v1.0.0").to_string(),
            "github.com/a/b v1.0.0"
        );
        assert_eq!(
            Dependency::indirect("github.com/a/b", "v1.0.0").to_string(),
            "github.com/a/b v1.0.0 // indirect"
        );
    }
}
