//! Configuration constants.
//!
//! This module defines the protocol constants (prefix, required properties,
//! default type) and the operational limits used when fetching documents.

/// Prefix carried by every Open Graph property in markup (`og:title`).
pub const OG_PREFIX: &str = "og:";

/// Properties a document must declare to conform to the Open Graph protocol.
pub const REQUIRED_PROPERTIES: [&str; 4] = ["title", "type", "image", "url"];

/// Value assigned to `type` when a document does not declare one.
///
/// Open Graph allows ungraded websites, so a missing type is treated as a
/// plain page rather than an error.
pub const DEFAULT_OG_TYPE: &str = "page";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag or
/// `ReaderConfig::user_agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters).
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Closing tag that ends the portion of a document read in head-only mode.
pub const HEAD_CLOSE_TAG: &str = "</head>";
