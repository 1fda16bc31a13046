//! Path validation
//!
//! Checklist paths must stay inside the base location.

use std::path::{Component, Path};

/// Validate a checklist path: non-empty, relative, no `..` components
pub fn validate_entry_path(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("path is empty".into());
    }

    if path.contains('\0') {
        return Err("path contains a NUL byte".into());
    }

    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err("path escapes the base location".into()),
            Component::RootDir | Component::Prefix(_) => {
                return Err("path must be relative".into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_relative_paths() {
        assert!(validate_entry_path("environments").is_ok());
        assert!(validate_entry_path("docs/README.md").is_ok());
        assert!(validate_entry_path("./SECURITY.md").is_ok());
    }

    #[test]
    fn test_rejects_unsafe_paths() {
        assert!(validate_entry_path("").is_err());
        assert!(validate_entry_path("   ").is_err());
        assert!(validate_entry_path("/etc/passwd").is_err());
        assert!(validate_entry_path("../README.md").is_err());
        assert!(validate_entry_path("docs/../../x").is_err());
    }
}
