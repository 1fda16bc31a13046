//! Documentation check operations

use std::path::Path;

use crate::error::ConfigError;
use crate::structure::{CheckReport, RequiredPathEntry, check_exists};

/// Checks that each documentation file exists as a regular file.
///
/// Only presence and kind are asserted; content is not inspected.
pub async fn check_documentation(
    base: &Path,
    docs: &[String],
) -> Result<CheckReport, ConfigError> {
    let entries: Vec<RequiredPathEntry> =
        docs.iter().map(|doc| RequiredPathEntry::file(doc)).collect();

    check_exists("docs", base, &entries).await
}
