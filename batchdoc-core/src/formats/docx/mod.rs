//! DOCX output
//!
//!     The IR is already flat and fully styled, so this format is a direct mapping onto docx-rs:
//!     - paragraphs keep their named style; "List Bullet" and "List Number" also get the
//!       matching numbering so the bullets and numbers show up without a template.
//!     - headings use the built-in `Heading1`..`Heading6` styles (./styles.rs).
//!     - run formatting is written explicitly, including disabled bold and italic.
//!     - page breaks are a paragraph holding a single page-break run.
//!     - every table cell holds exactly one paragraph, even when empty.

mod styles;
mod writer;

use crate::error::Result;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::Document;

pub use writer::write_docx;

/// Office Open XML word-processing output
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document (Office Open XML)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument> {
        write_docx(doc).map(SerializedDocument::Binary)
    }
}
