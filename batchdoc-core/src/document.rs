//! Document model trait definition
//!
//! This module defines the primitives the converter needs from a target document library.
//! The converter never talks to a concrete document type; it receives a `&mut dyn DocumentModel`
//! and addresses paragraphs, runs and tables through the handles returned here.
//!
//! The crate ships one implementation, the in-memory IR ([`crate::ir::Document`]), which is
//! later serialized by a [`crate::format::Format`]. Tests are free to plug in recording fakes.

use crate::error::Result;
use crate::style::Rgb;

/// Paragraph style applied to bulleted list items
pub const LIST_BULLET: &str = "List Bullet";

/// Paragraph style applied to numbered list items
pub const LIST_NUMBER: &str = "List Number";

/// Handle to a paragraph, either top-level or the default paragraph of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphRef {
    /// Paragraph (or heading) stored as a top-level block at this index
    Block(usize),
    /// Paragraph of the cell at (`row`, `column`) in the table stored at block `table`
    Cell {
        table: usize,
        row: usize,
        column: usize,
    },
}

/// Handle to a table stored as a top-level block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRef(pub usize);

/// Handle to a run inside a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunRef {
    pub paragraph: ParagraphRef,
    pub index: usize,
}

/// Primitive document-building operations
///
/// Blocks are appended in call order. Handles stay valid for the lifetime of the document,
/// since nothing is ever removed.
pub trait DocumentModel {
    /// Append a paragraph, optionally with a named paragraph style (e.g. [`LIST_BULLET`])
    fn add_paragraph(&mut self, style: Option<&str>) -> ParagraphRef;

    /// Append a heading at `level` (1 to 6)
    fn add_heading(&mut self, level: usize) -> ParagraphRef;

    /// Append a table of `rows` × `columns` empty cells
    fn add_table(&mut self, rows: usize, columns: usize) -> TableRef;

    /// Address the default paragraph of a table cell
    fn cell(&mut self, table: TableRef, row: usize, column: usize) -> Result<ParagraphRef>;

    /// Append an unformatted run of text to a paragraph
    fn add_run(&mut self, paragraph: ParagraphRef, text: &str) -> Result<RunRef>;

    /// Set the run's font, in both the Latin and East-Asian font slots
    fn set_run_font(&mut self, run: RunRef, name: &str) -> Result<()>;

    /// Set the run's font size in points
    fn set_run_size(&mut self, run: RunRef, points: f64) -> Result<()>;

    fn set_run_color(&mut self, run: RunRef, color: Rgb) -> Result<()>;

    fn set_run_bold(&mut self, run: RunRef, bold: bool) -> Result<()>;

    fn set_run_italic(&mut self, run: RunRef, italic: bool) -> Result<()>;

    /// Append a page break
    fn add_page_break(&mut self);
}
