//! Unified error types for the ghostdeck crate.
//!
//! This module provides a single error type that wraps package, format and
//! configuration errors, presenting a consistent API to the binary.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
