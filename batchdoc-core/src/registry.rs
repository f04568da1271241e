//! Output format lookup
//!
//! Formats are keyed by name. The CLI resolves `--to` through [`FormatRegistry::get`] and falls
//! back to [`FormatRegistry::detect_format_from_filename`] when only an output path is given.

use crate::error::{ExportError, Result};
use crate::format::{Format, SerializedDocument};
use crate::formats::{DocxFormat, JsonFormat, TreevizFormat};
use crate::ir::nodes::Document;
use std::collections::BTreeMap;
use std::path::Path;

/// Output formats by name, iterated in name order
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// An empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// docx, json and treeviz
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DocxFormat);
        registry.register(JsonFormat);
        registry.register(TreevizFormat);
        registry
    }

    /// Add `format`, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        self.formats.insert(name, Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format> {
        match self.formats.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(ExportError::FormatNotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Name of the format claiming the extension of `filename`, compared case-insensitively.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        self.formats
            .iter()
            .find(|(_, format)| format.file_extensions().contains(&extension.as_str()))
            .map(|(name, _)| name.clone())
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<SerializedDocument> {
        self.get(format)?.serialize(doc)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
