//! Intermediate Representation (IR) of the exported document
//!
//!     The IR is the crate's own document model: an ordered list of paragraphs, headings,
//!     tables and page breaks, with fully resolved run formatting. It implements
//!     [`DocumentModel`], so the converter builds it through the same primitives it would use
//!     against any other document library, and the output formats (./formats) serialize it.
//!
//!     Keeping this step in memory means the whole document is built before a single byte is
//!     written: a failure anywhere in the conversion leaves no partial output behind.

pub mod nodes;

use crate::document::{DocumentModel, ParagraphRef, RunRef, TableRef};
use crate::error::{ExportError, Result};
use crate::style::Rgb;
use nodes::{Block, Document, Heading, Paragraph, Run, RunFormat, Table};

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level paragraphs, in order (headings and tables excluded)
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Every run of the document in document order, table cells included
    pub fn runs(&self) -> Vec<&Run> {
        let mut runs = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => runs.extend(paragraph.runs.iter()),
                Block::Heading(heading) => runs.extend(heading.runs.iter()),
                Block::Table(table) => {
                    for cell in table.rows.iter().flatten() {
                        runs.extend(cell.runs.iter());
                    }
                }
                Block::PageBreak => {}
            }
        }
        runs
    }

    fn runs_mut(&mut self, target: ParagraphRef) -> Result<&mut Vec<Run>> {
        match target {
            ParagraphRef::Block(index) => match self.blocks.get_mut(index) {
                Some(Block::Paragraph(paragraph)) => Ok(&mut paragraph.runs),
                Some(Block::Heading(heading)) => Ok(&mut heading.runs),
                _ => Err(ExportError::InvalidTarget(format!(
                    "block {index} is not a paragraph"
                ))),
            },
            ParagraphRef::Cell { table, row, column } => match self.blocks.get_mut(table) {
                Some(Block::Table(found)) => found
                    .rows
                    .get_mut(row)
                    .and_then(|cells| cells.get_mut(column))
                    .map(|cell| &mut cell.runs)
                    .ok_or_else(|| {
                        ExportError::InvalidTarget(format!(
                            "cell ({row}, {column}) is outside table {table}"
                        ))
                    }),
                _ => Err(ExportError::InvalidTarget(format!(
                    "block {table} is not a table"
                ))),
            },
        }
    }

    fn format_mut(&mut self, run: RunRef) -> Result<&mut RunFormat> {
        self.runs_mut(run.paragraph)?
            .get_mut(run.index)
            .map(|found| &mut found.format)
            .ok_or_else(|| ExportError::InvalidTarget(format!("run {run:?} does not exist")))
    }

    fn push(&mut self, block: Block) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }
}

impl DocumentModel for Document {
    fn add_paragraph(&mut self, style: Option<&str>) -> ParagraphRef {
        let index = self.push(Block::Paragraph(Paragraph {
            style: style.map(str::to_string),
            runs: Vec::new(),
        }));
        ParagraphRef::Block(index)
    }

    fn add_heading(&mut self, level: usize) -> ParagraphRef {
        let index = self.push(Block::Heading(Heading {
            level,
            runs: Vec::new(),
        }));
        ParagraphRef::Block(index)
    }

    fn add_table(&mut self, rows: usize, columns: usize) -> TableRef {
        TableRef(self.push(Block::Table(Table::new(rows, columns))))
    }

    fn cell(&mut self, table: TableRef, row: usize, column: usize) -> Result<ParagraphRef> {
        match self.blocks.get(table.0) {
            Some(Block::Table(found)) if found.cell(row, column).is_some() => {
                Ok(ParagraphRef::Cell {
                    table: table.0,
                    row,
                    column,
                })
            }
            Some(Block::Table(_)) => Err(ExportError::InvalidTarget(format!(
                "cell ({row}, {column}) is outside table {}",
                table.0
            ))),
            _ => Err(ExportError::InvalidTarget(format!(
                "block {} is not a table",
                table.0
            ))),
        }
    }

    fn add_run(&mut self, paragraph: ParagraphRef, text: &str) -> Result<RunRef> {
        let runs = self.runs_mut(paragraph)?;
        runs.push(Run {
            text: text.to_string(),
            format: RunFormat::default(),
        });
        Ok(RunRef {
            paragraph,
            index: runs.len() - 1,
        })
    }

    fn set_run_font(&mut self, run: RunRef, name: &str) -> Result<()> {
        let format = self.format_mut(run)?;
        format.font = Some(name.to_string());
        format.east_asia_font = Some(name.to_string());
        Ok(())
    }

    fn set_run_size(&mut self, run: RunRef, points: f64) -> Result<()> {
        self.format_mut(run)?.size = Some(points);
        Ok(())
    }

    fn set_run_color(&mut self, run: RunRef, color: Rgb) -> Result<()> {
        self.format_mut(run)?.color = Some(color);
        Ok(())
    }

    fn set_run_bold(&mut self, run: RunRef, bold: bool) -> Result<()> {
        self.format_mut(run)?.bold = Some(bold);
        Ok(())
    }

    fn set_run_italic(&mut self, run: RunRef, italic: bool) -> Result<()> {
        self.format_mut(run)?.italic = Some(italic);
        Ok(())
    }

    fn add_page_break(&mut self) {
        self.push(Block::PageBreak);
    }
}
