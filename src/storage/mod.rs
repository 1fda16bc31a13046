//! Filesystem access
//!
//! Metadata inspection and checklist path validation.

pub mod filesystem;
pub mod validation;

pub use filesystem::{directory_exists, observe_kind};
pub use validation::validate_entry_path;
