//! Error types for XMI extraction.
//!
//! Two levels of failure exist. [`AttrError`] describes a single element
//! whose attributes could not be read; it never aborts a document and is
//! carried as data inside a [`Diagnostic`](crate::Diagnostic).
//! [`ExtractError`] is a structural failure that aborts the whole document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for document extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// An attribute that could not be read as the type its field requires.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AttrError {
    /// A required attribute is absent.
    #[error("required attribute `{attribute}` is missing")]
    Missing { attribute: String },

    /// Value is not an integer.
    #[error("attribute `{attribute}` is not an integer: {value:?}")]
    NotInteger { attribute: String, value: String },

    /// Value is not a floating point number.
    #[error("attribute `{attribute}` is not a number: {value:?}")]
    NotFloat { attribute: String, value: String },

    /// Value is neither `true` nor `false`.
    #[error("attribute `{attribute}` is not a boolean: {value:?}")]
    NotBoolean { attribute: String, value: String },

    /// `begin`/`end` parse but do not form a non-empty half-open span.
    #[error("span [{begin}, {end}) is empty or reversed")]
    InvalidSpan { begin: usize, end: usize },
}

impl AttrError {
    /// Create a missing-attribute error.
    pub fn missing(attribute: impl Into<String>) -> Self {
        Self::Missing {
            attribute: attribute.into(),
        }
    }

    /// Name of the offending attribute.
    pub fn attribute(&self) -> &str {
        match self {
            Self::Missing { attribute }
            | Self::NotInteger { attribute, .. }
            | Self::NotFloat { attribute, .. }
            | Self::NotBoolean { attribute, .. } => attribute,
            Self::InvalidSpan { .. } => crate::constants::ATTR_END,
        }
    }

    /// Raw value that failed to parse, if the attribute was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::NotInteger { value, .. }
            | Self::NotFloat { value, .. }
            | Self::NotBoolean { value, .. } => Some(value),
            Self::Missing { .. } | Self::InvalidSpan { .. } => None,
        }
    }
}

/// Document-level failure. The document yields no records at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Input bytes are not UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The XML is not well-formed.
    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// No element at all.
    #[error("document has no root element")]
    NoRoot,

    /// A second top-level element follows the root.
    #[error("document has more than one root element")]
    MultipleRoots,

    /// Input ended while elements were still open.
    #[error("document ended with {open} unclosed element(s)")]
    Truncated { open: usize },
}

impl ExtractError {
    /// Create an XML syntax error.
    pub fn xml(position: u64, message: impl Into<String>) -> Self {
        Self::Xml {
            position,
            message: message.into(),
        }
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Encoding(_) => Some("XMI files must be UTF-8. Re-export the CAS with UTF-8 encoding."),
            Self::Xml { .. } | Self::Truncated { .. } => {
                Some("The file is not complete XML. Check that the pipeline finished writing it.")
            }
            Self::NoRoot | Self::MultipleRoots => {
                Some("Expected a single <xmi:XMI> root element.")
            }
        }
    }
}
