//! Error handling.
//!
//! This module provides:
//! - The error returned by a failed read, with its coarse categorization
//! - Initialization and configuration errors
//! - Warning kinds for conditions that are logged but never fail a read
//!
//! Error kinds are categorized into:
//! - **Errors**: malformed URL, retrieval failure, specification violation
//! - **Warnings**: heuristic misses and unresolved types

mod types;

// Re-export public API
pub use types::{
    ConfigValidationError, ErrorType, InitializationError, OpenGraphError, WarningType,
};

/// Result alias used by the reading pipeline.
pub type Result<T, E = OpenGraphError> = std::result::Result<T, E>;
