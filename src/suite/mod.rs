//! Check suite
//!
//! Runs the structure and documentation checks and aggregates verdicts.

pub mod runner;

pub use runner::{CheckSelection, CheckSuite, SuiteReport};
