//! Checklist entries
//!
//! A required path paired with the kind of filesystem object expected there.

use serde::Deserialize;
use std::fmt;

/// Kind a required path must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Directory,
    #[serde(alias = "file")]
    RegularFile,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Directory => write!(f, "directory"),
            PathKind::RegularFile => write!(f, "regular file"),
        }
    }
}

/// Kind actually found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedKind {
    Directory,
    RegularFile,
    /// Sockets, fifos, devices
    Other,
}

impl ObservedKind {
    pub fn matches(self, expected: PathKind) -> bool {
        matches!(
            (self, expected),
            (ObservedKind::Directory, PathKind::Directory)
                | (ObservedKind::RegularFile, PathKind::RegularFile)
        )
    }
}

impl fmt::Display for ObservedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedKind::Directory => write!(f, "directory"),
            ObservedKind::RegularFile => write!(f, "regular file"),
            ObservedKind::Other => write!(f, "special file"),
        }
    }
}

/// One item of the checklist, relative to the base location
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequiredPathEntry {
    pub path: String,
    pub kind: PathKind,
}

impl RequiredPathEntry {
    pub fn directory(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: PathKind::Directory,
        }
    }

    pub fn file(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: PathKind::RegularFile,
        }
    }
}

/// Layout every repository must carry
pub fn default_checklist() -> Vec<RequiredPathEntry> {
    vec![
        RequiredPathEntry::directory("environments"),
        RequiredPathEntry::file("README.md"),
        RequiredPathEntry::file("SECURITY.md"),
    ]
}

/// Documentation files checked by the docs check
pub fn default_docs() -> Vec<String> {
    vec!["README.md".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matching() {
        assert!(ObservedKind::Directory.matches(PathKind::Directory));
        assert!(ObservedKind::RegularFile.matches(PathKind::RegularFile));
        assert!(!ObservedKind::Directory.matches(PathKind::RegularFile));
        assert!(!ObservedKind::RegularFile.matches(PathKind::Directory));
        assert!(!ObservedKind::Other.matches(PathKind::RegularFile));
    }

    #[test]
    fn test_default_checklist() {
        let entries = default_checklist();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], RequiredPathEntry::directory("environments"));
        assert_eq!(entries[1], RequiredPathEntry::file("README.md"));
        assert_eq!(entries[2], RequiredPathEntry::file("SECURITY.md"));
    }
}
