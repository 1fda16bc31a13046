//! Configuration management for scaffold-check
//!
//! The checklist is data: it is loaded from an optional TOML file with
//! environment overrides, and falls back to the built-in layout.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::storage::validate_entry_path;
use crate::structure::{RequiredPathEntry, default_checklist, default_docs};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "scaffold-check.toml";

/// Prefix for environment overrides, e.g. `SCAFFOLD_CHECK__BASE_PATH`
pub const ENV_PREFIX: &str = "SCAFFOLD_CHECK";

/// Complete checker configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckerConfig {
    /// Directory all checklist paths are resolved against
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// Required layout for the structure check
    #[serde(default = "default_checklist")]
    pub entries: Vec<RequiredPathEntry>,

    /// Files the documentation check expects
    #[serde(default = "default_docs")]
    pub docs: Vec<String>,
}

fn default_base_path() -> PathBuf {
    PathBuf::from("..")
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            entries: default_checklist(),
            docs: default_docs(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration with environment overrides.
    ///
    /// An explicit `path` must exist. Without one, `DEFAULT_CONFIG_FILE` is
    /// read if present and the built-in layout applies otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: CheckerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base location, e.g. from a command-line flag
    pub fn with_base_path(mut self, base_path: PathBuf) -> Result<Self, ConfigError> {
        self.base_path = base_path;
        self.validate()?;
        Ok(self)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEntry {
                path: String::new(),
                reason: "base_path cannot be empty".into(),
            });
        }

        if self.entries.is_empty() {
            return Err(ConfigError::EmptyChecklist("structure".into()));
        }

        if self.docs.is_empty() {
            return Err(ConfigError::EmptyChecklist("docs".into()));
        }

        let paths = self
            .entries
            .iter()
            .map(|e| e.path.as_str())
            .chain(self.docs.iter().map(String::as_str));

        for path in paths {
            validate_entry_path(path).map_err(|reason| ConfigError::InvalidEntry {
                path: path.to_string(),
                reason,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::PathKind;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_explicit_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = CheckerConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_load_custom_checklist() {
        let file = write_config(
            r#"
base_path = "/srv/repo"
docs = ["README.md", "CONTRIBUTING.md"]

[[entries]]
path = "charts"
kind = "directory"

[[entries]]
path = "LICENSE"
kind = "file"
"#,
        );

        let config = CheckerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_path, PathBuf::from("/srv/repo"));
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].kind, PathKind::Directory);
        assert_eq!(config.entries[1].kind, PathKind::RegularFile);
        assert_eq!(config.docs.len(), 2);
    }

    #[test]
    fn test_empty_checklist_rejected() {
        let config = CheckerConfig {
            entries: vec![],
            ..CheckerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyChecklist(_))
        ));
    }

    #[test]
    fn test_escaping_entry_rejected() {
        let config = CheckerConfig {
            entries: vec![RequiredPathEntry::file("../outside.md")],
            ..CheckerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_with_base_path_overrides() {
        let config = CheckerConfig::default()
            .with_base_path(PathBuf::from("/tmp/x"))
            .unwrap();
        assert_eq!(config.base_path, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_with_empty_base_path_rejected() {
        let result = CheckerConfig::default().with_base_path(PathBuf::new());
        assert!(matches!(result, Err(ConfigError::InvalidEntry { .. })));
    }
}
