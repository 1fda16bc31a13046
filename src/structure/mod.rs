//! Structure validation
//!
//! Checks a list of required paths against the filesystem.

mod entry;
mod operations;
mod results;

pub use entry::{ObservedKind, PathKind, RequiredPathEntry, default_checklist, default_docs};
pub use operations::{check_entry, check_exists};
pub use results::{CheckReport, EntryOutcome};
