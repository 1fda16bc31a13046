//! Error types
//!
//! Per-entry check failures are kept apart from configuration failures:
//! the former become verdicts in a report, the latter abort the run.

use std::fmt;
use std::io;

use crate::structure::{ObservedKind, PathKind};

/// Failure verdict for a single required path
#[derive(Debug)]
pub enum CheckError {
    MissingPath(String),
    WrongKind {
        path: String,
        expected: PathKind,
        actual: ObservedKind,
    },
    Io { path: String, source: io::Error },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::MissingPath(p) => write!(f, "Missing path: {}", p),
            CheckError::WrongKind {
                path,
                expected,
                actual,
            } => write!(
                f,
                "Wrong kind for {}: expected {}, found {}",
                path, expected, actual
            ),
            CheckError::Io { path, source } => write!(f, "IO error on {}: {}", path, source),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Equality ignores the io::Error payload beyond its kind.
impl PartialEq for CheckError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CheckError::MissingPath(a), CheckError::MissingPath(b)) => a == b,
            (
                CheckError::WrongKind {
                    path: p1,
                    expected: e1,
                    actual: a1,
                },
                CheckError::WrongKind {
                    path: p2,
                    expected: e2,
                    actual: a2,
                },
            ) => p1 == p2 && e1 == e2 && a1 == a2,
            (
                CheckError::Io {
                    path: p1,
                    source: s1,
                },
                CheckError::Io {
                    path: p2,
                    source: s2,
                },
            ) => p1 == p2 && s1.kind() == s2.kind(),
            _ => false,
        }
    }
}

/// Configuration errors, raised before any check runs
#[derive(Debug)]
pub enum ConfigError {
    Load(config::ConfigError),
    EmptyChecklist(String),
    InvalidEntry { path: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Failed to load configuration: {}", e),
            ConfigError::EmptyChecklist(check) => {
                write!(f, "Checklist for '{}' is empty", check)
            }
            ConfigError::InvalidEntry { path, reason } => {
                write!(f, "Invalid entry '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Load(error)
    }
}

/// Top-level error returned by the check suite
#[derive(Debug)]
pub enum ScaffoldError {
    Config(ConfigError),
    ChecksFailed { failed: usize, total: usize },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::Config(e) => write!(f, "Configuration error: {}", e),
            ScaffoldError::ChecksFailed { failed, total } => {
                write!(f, "{} of {} required paths failed", failed, total)
            }
        }
    }
}

impl std::error::Error for ScaffoldError {}

impl From<ConfigError> for ScaffoldError {
    fn from(error: ConfigError) -> Self {
        ScaffoldError::Config(error)
    }
}
