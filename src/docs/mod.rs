//! Documentation check
//!
//! Confirms the documentation files are present as regular files.

mod operations;

pub use operations::check_documentation;
