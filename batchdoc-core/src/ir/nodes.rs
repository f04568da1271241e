//! Core data structures for the document IR.
//!
//! The IR is a flat list of blocks. Inline nesting never survives into it: by the time text
//! reaches a [`Run`], every style decision has already been merged into its [`RunFormat`].

use crate::style::Rgb;
use serde::Serialize;

/// The root of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    Table(Table),
    PageBreak,
}

/// A paragraph with an optional named paragraph style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub runs: Vec<Run>,
}

/// A heading at a specific level (1 to 6).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub runs: Vec<Run>,
}

/// A rectangular table; every cell holds exactly one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<Vec<Paragraph>>,
}

/// Smallest styled unit of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub format: RunFormat,
}

/// Explicit run formatting. `None` means "never set", which is not the same as `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub east_asia_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl Table {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: vec![vec![Paragraph::default(); columns]; rows],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Paragraph> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }
}

impl Paragraph {
    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl Heading {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl RunFormat {
    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }
}
