//! Structure result types
//!
//! Defines the per-entry verdicts and the aggregated report.

use std::path::PathBuf;

use crate::error::CheckError;
use crate::structure::RequiredPathEntry;

/// Verdict for a single checklist entry
#[derive(Debug, PartialEq)]
pub struct EntryOutcome {
    pub entry: RequiredPathEntry,
    pub result: Result<(), CheckError>,
}

impl EntryOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of running one check over its checklist
#[derive(Debug, PartialEq)]
pub struct CheckReport {
    pub check: String,
    pub base_path: PathBuf,
    /// Same order as the input entries
    pub outcomes: Vec<EntryOutcome>,
}

impl CheckReport {
    /// True iff every entry passed
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(EntryOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Human-readable lines, one per entry
    pub fn render(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(()) => format!("[{}] PASS {} ({})", self.check, o.entry.path, o.entry.kind),
                Err(e) => format!("[{}] FAIL {}", self.check, e),
            })
            .collect()
    }
}
