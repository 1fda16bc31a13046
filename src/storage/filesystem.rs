//! File system inspection
//!
//! Read-only metadata queries. Symlinks are followed, so a dangling link
//! reports `NotFound`.

use std::io::Result;
use std::path::Path;
use tokio::fs;

use crate::structure::ObservedKind;

/// Query what kind of object lives at `path`
pub async fn observe_kind(path: &Path) -> Result<ObservedKind> {
    let metadata = fs::metadata(path).await?;
    let file_type = metadata.file_type();

    Ok(if file_type.is_dir() {
        ObservedKind::Directory
    } else if file_type.is_file() {
        ObservedKind::RegularFile
    } else {
        ObservedKind::Other
    })
}

/// Check if directory exists
pub async fn directory_exists(path: &Path) -> bool {
    matches!(observe_kind(path).await, Ok(ObservedKind::Directory))
}
