//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text helpers (blank checks, prefix stripping, attribute escaping)

pub mod sanitize;
mod selector;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
