//! Error handling
//!
//! Defines error types and handling for the structure checker.

pub mod handlers;
pub mod types;

pub use types::*;
