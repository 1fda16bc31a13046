pub mod config;
pub mod docs;
pub mod error;
pub mod storage;
pub mod structure;
pub mod suite;
pub mod utils;

pub use config::CheckerConfig;
pub use error::{CheckError, ConfigError, ScaffoldError};
pub use structure::{CheckReport, PathKind, RequiredPathEntry, check_exists};
pub use suite::{CheckSelection, CheckSuite, SuiteReport};
