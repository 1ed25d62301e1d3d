//! Error types for rule file loading.

use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Failure to load or parse a rule file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The rule file does not exist. Callers usually treat this as
    /// "no rules configured".
    #[error("rule file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute list is malformed (duplicate or unquoted attribute).
    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    /// An attribute value could not be unescaped.
    #[error("invalid value for attribute '{attribute}': {message}")]
    AttributeValue { attribute: String, message: String },

    /// `maxDays` or `maxCount` is not a 32-bit integer.
    #[error("attribute '{attribute}' must be a 32-bit integer, got '{value}'")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },

    #[error("document has no root element")]
    MissingRoot,

    /// Character data before or after the root element.
    #[error("text outside the root element: '{text}'")]
    TextOutsideRoot { text: String },

    #[error("unexpected second root element <{name}>")]
    UnexpectedRoot { name: String },

    #[error("element <{name}> is not closed")]
    UnclosedElement { name: String },

    /// Parse failure of a named file.
    #[error("failed to parse rule file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Result type alias for rule loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// True when the rule file was absent, as opposed to unreadable or
    /// malformed.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}
