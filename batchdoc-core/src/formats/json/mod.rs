//! JSON dump of the document IR
//!
//! The IR's serde derives are the schema: blocks are tagged with `type`, unset run formatting
//! is omitted.

use crate::error::{ExportError, Result};
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::Document;

/// Format implementation for the JSON dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document blocks and runs as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument> {
        serde_json::to_string_pretty(doc)
            .map(SerializedDocument::Text)
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
