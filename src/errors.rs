//! Error types for arrangement construction
//!
//! `ArrangementError` is what callers of the builder see. XML-level failures
//! are wrapped from `SongXmlError` so the original cause stays inspectable.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for arrangement operations
pub type Result<T> = std::result::Result<T, ArrangementError>;

/// Fatal errors raised while building an arrangement descriptor
#[derive(Debug, Error)]
pub enum ArrangementError {
    /// Legacy (single tone) attributes carry values in tone slots A-D
    #[error("legacy arrangement has extraneous tone data in slot(s): {}", slots.join(", "))]
    InconsistentLegacyToneData { slots: Vec<&'static str> },

    /// A slotted tone is declared but the XML song has no tone storage for it
    #[error("tone '{tone}' needs a tone slot but the XML arrangement has no tones; re-author the XML and fix custom tones")]
    MissingXmlToneData { tone: String },

    /// An enumerated field carries a code with no matching variant
    #[error("invalid value '{value}' for enumerated field {field}")]
    InvalidEnumerationValue { field: &'static str, value: String },

    /// The persistent identifier is not a valid UUID string
    #[error("malformed persistent identifier '{value}': {source}")]
    MalformedIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// The per-segment visual density sequence has no entries
    #[error("DynamicVisualDensity is empty, cannot derive scroll speed")]
    EmptyVisualDensity,

    /// The OS random source failed while generating identifiers
    #[error("OS random source unavailable: {0}")]
    RandomSource(String),

    #[error(transparent)]
    SongXml(#[from] SongXmlError),

    /// Manifest or tuning catalog JSON could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("build options parse error: {0}")]
    Options(#[from] serde_yaml::Error),
}

impl ArrangementError {
    pub(crate) fn invalid_enum(field: &'static str, value: impl ToString) -> Self {
        ArrangementError::InvalidEnumerationValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors from loading or saving an XML song document
#[derive(Debug, Error)]
pub enum SongXmlError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML is not well-formed
    #[error("invalid XML: {0}")]
    InvalidXml(String),

    /// Root element is neither `<song>` nor `<vocals>`
    #[error("expected <song> or <vocals> root element, found <{0}>")]
    UnexpectedRoot(String),

    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidValue {
        element: String,
        attribute: String,
        value: String,
    },

    /// Re-serializing the document failed
    #[error("XML write error: {0}")]
    Write(String),
}
