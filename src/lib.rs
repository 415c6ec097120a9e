//! opengraph library: Open Graph metadata extraction
//!
//! This library reads the `og:` meta properties of a web page, checks them
//! against the protocol's required set, classifies the page into a base type,
//! and mines a title and description from the page structure when they are
//! not declared. Entities can also be built by hand and rendered back to
//! `<meta>` markup.
//!
//! # Example
//!
//! ```no_run
//! use opengraph::{Reader, ReaderConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = Reader::new(ReaderConfig {
//!     ignore_specification_errors: false,
//!     ..Default::default()
//! });
//!
//! let og = reader.read("https://www.imdb.com/title/tt0117500/").await?;
//! println!("{:?} ({:?})", og.get_property("title"), og.base_type());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching (`Reader::read`) requires a Tokio runtime. Reading markup that is
//! already in memory (`Reader::read_str`) is synchronous.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod opengraph;
pub mod parse;
mod reader;
mod taxonomy;
mod utils;

// Re-export public API
pub use config::{LogFormat, LogLevel, ReaderConfig};
pub use error_handling::{
    ConfigValidationError, ErrorType, InitializationError, OpenGraphError, WarningType,
};
pub use opengraph::{MarkupStyle, OpenGraph, PropertyMap};
pub use reader::{read, truncate_after_head, Reader};
pub use taxonomy::BaseType;
