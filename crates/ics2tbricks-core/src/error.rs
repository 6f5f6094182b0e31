//! Error types for the ICS to resource transform.

use thiserror::Error;

/// Errors surfaced by the transform.
///
/// Items with an unparseable start date are not errors; the holiday
/// extractor drops them.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The ICS parser rejected the document.
    #[error("failed to parse ICS data: {0}")]
    IcsParse(String),

    /// Writing the XML document failed.
    #[error("failed to write XML resource: {0}")]
    XmlWrite(String),
}

/// A specialized Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
