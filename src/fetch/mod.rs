//! Document retrieval.
//!
//! Fetches the markup the reader parses: URL validation, browser-like
//! request headers, size-capped body reads. Also resolves favicon URLs for
//! the image fallback.

mod document;
mod favicon;
mod request;
mod validation;

pub use document::fetch_document;
pub(crate) use favicon::favicon_url;
pub use validation::parse_document_url;
