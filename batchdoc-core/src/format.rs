//! Format trait definition
//!
//! This module defines the Format trait that every output format implements. A format takes the
//! finished IR document and turns it into bytes; it never builds or changes the document.

use crate::error::Result;
use crate::ir::nodes::Document;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., treeviz, json)
    Text(String),
    /// Binary output (e.g., docx)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct WordCount;
///
/// impl Format for WordCount {
///     fn name(&self) -> &str {
///         "wc"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<SerializedDocument> {
///         let words = doc.runs().iter().map(|run| run.text.split_whitespace().count()).sum::<usize>();
///         Ok(SerializedDocument::Text(words.to_string()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docx", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["docx"], ["tree", "treeviz"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether the output is binary and therefore must go to a file
    fn is_binary(&self) -> bool {
        false
    }

    /// Serialize a finished document
    fn serialize(&self, doc: &Document) -> Result<SerializedDocument>;
}
