//! HTML parsing and Open Graph extraction.
//!
//! This module turns a parsed document into Open Graph properties:
//! - Harvesting declared `og:` (and optionally plain) meta properties
//! - Validating the required property set
//! - Classifying the declared type into a base category
//! - Mining undeclared titles and descriptions from the document structure
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod classify;
mod harvest;
mod mine;
mod validate;

// Re-export public API
pub use classify::{classify, find_overlapping_types};
pub use harvest::harvest_properties;
pub use mine::{
    mine_image, mine_missing, run_chain, MiningStep, DESCRIPTION_CHAIN, TITLE_CHAIN,
};
pub use validate::{missing_required, validate_required};
