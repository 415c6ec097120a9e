//! Error type definitions.
//!
//! This module defines all error and warning types used throughout the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A configuration field holding an out-of-range value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// What the field must satisfy.
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors that abort reading a document.
///
/// Heuristic misses and unresolved types are not errors; they leave the
/// corresponding value unset (see [`WarningType`]).
#[derive(Error, Debug)]
pub enum OpenGraphError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but is not something we fetch.
    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),

    /// Network or I/O failure while retrieving the document.
    #[error("Failed to retrieve document: {0}")]
    Retrieval(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("Failed to retrieve {url}: HTTP {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Status code returned by the server
        status: u16,
    },

    /// The response body exceeded the configured limit.
    #[error("Document at {url} exceeds the {limit} byte limit")]
    BodyTooLarge {
        /// Requested URL
        url: String,
        /// Configured limit in bytes
        limit: usize,
    },

    /// The document does not declare every required property.
    #[error("Does not conform to the Open Graph protocol: missing {}", .missing.join(", "))]
    SpecificationViolation {
        /// Missing required properties, in declaration order of the required set
        missing: Vec<String>,
    },

    /// The reader configuration is out of range.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigValidationError),
}

impl OpenGraphError {
    /// Classifies the error into its coarse kind.
    pub fn error_type(&self) -> ErrorType {
        match self {
            OpenGraphError::InvalidUrl(_) | OpenGraphError::UnsupportedUrl(_) => {
                ErrorType::MalformedUrl
            }
            OpenGraphError::Retrieval(e) if e.is_timeout() => ErrorType::RetrievalTimeout,
            OpenGraphError::Retrieval(_)
            | OpenGraphError::HttpStatus { .. }
            | OpenGraphError::BodyTooLarge { .. } => ErrorType::Retrieval,
            OpenGraphError::SpecificationViolation { .. } => ErrorType::SpecificationViolation,
            OpenGraphError::InvalidConfig(_) => ErrorType::InvalidConfig,
        }
    }

    /// Missing required properties, if this is a specification violation.
    pub fn missing_properties(&self) -> Option<&[String]> {
        match self {
            OpenGraphError::SpecificationViolation { missing } => Some(missing),
            _ => None,
        }
    }
}

/// Coarse categories of read failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    MalformedUrl,
    Retrieval,
    RetrievalTimeout,
    SpecificationViolation,
    InvalidConfig,
}

/// Conditions worth logging that do not fail a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" or "Unresolved"
pub enum WarningType {
    MissingTitle,       // Neither declared nor recoverable from the document
    MissingDescription, // Neither declared nor recoverable from the document
    UnresolvedType,     // Declared type is not part of the base-type taxonomy
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MalformedUrl => "Malformed URL",
            ErrorType::Retrieval => "Document retrieval error",
            ErrorType::RetrievalTimeout => "Document retrieval timeout",
            ErrorType::SpecificationViolation => "Open Graph specification violation",
            ErrorType::InvalidConfig => "Invalid reader configuration",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingDescription => "Missing description",
            WarningType::UnresolvedType => "Unresolved type",
        }
    }
}
