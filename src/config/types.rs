//! Configuration types and CLI options.
//!
//! This module defines the reader configuration used by the library and the
//! command-line options parsed by the binary.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::ConfigValidationError;
use crate::opengraph::MarkupStyle;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Reader configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use opengraph::ReaderConfig;
///
/// let config = ReaderConfig {
///     ignore_specification_errors: false,
///     ..Default::default()
/// };
/// assert!(config.mine_extra_information);
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Accept documents that do not declare every required property.
    pub ignore_specification_errors: bool,

    /// Harvest plain `name=` meta tags and mine missing title/description
    /// from the document structure.
    pub mine_extra_information: bool,

    /// Discard everything after the first `</head>` before parsing.
    pub head_only: bool,

    /// Point a blank `image` at the site favicon when the source URL is known.
    pub favicon_fallback: bool,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Largest response body accepted, in bytes
    pub max_body_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            ignore_specification_errors: true,
            mine_extra_information: true,
            head_only: false,
            favicon_fallback: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Checks the operational settings.
    ///
    /// The two pipeline flags are always valid; only the fetch settings can be
    /// out of range.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "must not be empty",
            ));
        }
        if self.max_body_size == 0 {
            return Err(ConfigValidationError::new(
                "max_body_size",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Output mode of the command-line tool.
#[derive(Clone, Debug, ValueEnum)]
pub enum MarkupOption {
    /// `<meta property="og:..." />`
    Property,
    /// `<meta name="og:..." />`
    Name,
}

impl From<MarkupOption> for MarkupStyle {
    fn from(m: MarkupOption) -> Self {
        match m {
            MarkupOption::Property => MarkupStyle::Property,
            MarkupOption::Name => MarkupStyle::Name,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print the main fields
/// opengraph https://example.com/article
///
/// # Fail unless the page declares title, type, image and url
/// opengraph https://example.com/article --strict
///
/// # Dump the whole entity as JSON
/// opengraph https://example.com/article --json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "opengraph",
    about = "Reads the Open Graph metadata of a web page."
)]
pub struct Opt {
    /// Page to read
    #[arg(value_parser)]
    pub url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Fail if the page does not declare title, type, image and url
    #[arg(long)]
    pub strict: bool,

    /// Only use declared og: properties (no heuristic mining)
    #[arg(long)]
    pub no_mining: bool,

    /// Stop reading the document at the closing head tag
    #[arg(long)]
    pub head_only: bool,

    /// Use the site favicon when no image is declared
    #[arg(long)]
    pub favicon_fallback: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the whole entity as JSON
    #[arg(long, conflicts_with = "markup")]
    pub json: bool,

    /// Print the properties as meta tags: property|name
    #[arg(long, value_enum)]
    pub markup: Option<MarkupOption>,
}

impl From<&Opt> for ReaderConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            ignore_specification_errors: !opt.strict,
            mine_extra_information: !opt.no_mining,
            head_only: opt.head_only,
            favicon_fallback: opt.favicon_fallback,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }
}
