//! Structure check operations

use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::error::{CheckError, ConfigError};
use crate::storage::{directory_exists, observe_kind, validate_entry_path};
use crate::structure::{CheckReport, EntryOutcome, RequiredPathEntry};

/// Checks a single entry against `base`
pub async fn check_entry(base: &Path, entry: &RequiredPathEntry) -> Result<(), CheckError> {
    let full_path = base.join(&entry.path);

    match observe_kind(&full_path).await {
        Ok(actual) if actual.matches(entry.kind) => Ok(()),
        Ok(actual) => Err(CheckError::WrongKind {
            path: entry.path.clone(),
            expected: entry.kind,
            actual,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(CheckError::MissingPath(entry.path.clone()))
        }
        Err(e) => Err(CheckError::Io {
            path: entry.path.clone(),
            source: e,
        }),
    }
}

/// Checks every entry concurrently and reports each verdict.
///
/// An empty checklist is a configuration error, not a vacuous pass. Entry
/// paths are validated before any filesystem access. Outcomes keep the
/// input order regardless of task completion order.
pub async fn check_exists(
    check: &str,
    base: &Path,
    entries: &[RequiredPathEntry],
) -> Result<CheckReport, ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::EmptyChecklist(check.to_string()));
    }

    for entry in entries {
        validate_entry_path(&entry.path).map_err(|reason| ConfigError::InvalidEntry {
            path: entry.path.clone(),
            reason,
        })?;
    }

    if !directory_exists(base).await {
        warn!(
            "[{}] Base location {} is not an accessible directory",
            check,
            base.display()
        );
    }

    let base: Arc<PathBuf> = Arc::new(base.to_path_buf());
    let mut tasks = JoinSet::new();

    for (index, entry) in entries.iter().cloned().enumerate() {
        let base = Arc::clone(&base);
        tasks.spawn(async move {
            let result = check_entry(&base, &entry).await;
            (index, EntryOutcome { entry, result })
        });
    }

    let mut slots: Vec<Option<EntryOutcome>> = entries.iter().map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => {
                match &outcome.result {
                    Ok(()) => debug!("[{}] {} ok", check, outcome.entry.path),
                    Err(e) => warn!("[{}] {}", check, e),
                }
                slots[index] = Some(outcome);
            }
            Err(e) => warn!("[{}] Check task failed: {}", check, e),
        }
    }

    // A slot left empty means its task panicked or was cancelled.
    let outcomes = slots
        .into_iter()
        .zip(entries)
        .map(|(slot, entry)| {
            slot.unwrap_or_else(|| EntryOutcome {
                entry: entry.clone(),
                result: Err(CheckError::Io {
                    path: entry.path.clone(),
                    source: std::io::Error::other("check task did not complete"),
                }),
            })
        })
        .collect();

    Ok(CheckReport {
        check: check.to_string(),
        base_path: base.to_path_buf(),
        outcomes,
    })
}
