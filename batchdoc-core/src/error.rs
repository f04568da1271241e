//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while building or serializing an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Markup produced by the Markdown renderer does not parse as a tree
    #[error("Markup error: {0}")]
    Markup(String),
    /// A structured error payload could not be pretty-printed
    #[error("Failed to render error payload: {0}")]
    Payload(#[source] serde_json::Error),
    /// A paragraph, run or table handle does not address the document
    #[error("Invalid document target: {0}")]
    InvalidTarget(String),
    /// Output format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization of the finished document
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Batch input could not be decoded
    #[error("Invalid batch input: {0}")]
    Input(String),
}

pub type Result<T, E = ExportError> = std::result::Result<T, E>;
