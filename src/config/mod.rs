//! Reader configuration and constants.
//!
//! This module provides:
//! - Protocol constants (prefix, required properties, default type)
//! - Fetch limits and defaults
//! - Reader configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, MarkupOption, Opt, ReaderConfig};
