//! IR → docx-rs document

use super::styles::{self, numbering_for, style_id};
use crate::error::{ExportError, Result};
use crate::ir::nodes::{Block, Document, Heading, Paragraph as IrParagraph, Run as IrRun, Table as IrTable};
use docx_rs::*;
use log::debug;
use std::io::Cursor;

/// Build the document and pack it into `.docx` bytes.
pub fn write_docx(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = styles::initialize(Docx::new());
    for block in &doc.blocks {
        docx = match block {
            Block::Paragraph(paragraph) => docx.add_paragraph(build_paragraph(paragraph)),
            Block::Heading(heading) => docx.add_paragraph(build_heading(heading)),
            Block::Table(table) => docx.add_table(build_table(table)),
            Block::PageBreak => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            }
        };
    }
    debug!("packing {} blocks as docx", doc.blocks.len());

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| ExportError::Serialization(format!("Failed to pack DOCX: {e}")))?;
    Ok(buffer)
}

fn build_paragraph(paragraph: &IrParagraph) -> Paragraph {
    let mut para = Paragraph::new();
    if let Some(name) = &paragraph.style {
        let id = style_id(name);
        if let Some(numbering) = numbering_for(&id) {
            para = para.numbering(NumberingId::new(numbering), IndentLevel::new(0));
        }
        para = para.style(&id);
    }
    add_runs(para, &paragraph.runs)
}

fn build_heading(heading: &Heading) -> Paragraph {
    let level = heading.level.clamp(1, 6);
    add_runs(
        Paragraph::new().style(&format!("Heading{level}")),
        &heading.runs,
    )
}

fn build_table(table: &IrTable) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|cells| {
            TableRow::new(
                cells
                    .iter()
                    .map(|cell| TableCell::new().add_paragraph(build_paragraph(cell)))
                    .collect(),
            )
        })
        .collect();
    Table::new(rows)
}

fn add_runs(paragraph: Paragraph, runs: &[IrRun]) -> Paragraph {
    runs.iter()
        .fold(paragraph, |paragraph, run| paragraph.add_run(build_run(run)))
}

fn build_run(run: &IrRun) -> Run {
    // Line breaks inside a run become explicit breaks; Word ignores raw newlines in text.
    let mut docx_run = Run::new();
    for (index, line) in run.text.split('\n').enumerate() {
        if index > 0 {
            docx_run = docx_run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            docx_run = docx_run.add_text(line);
        }
    }

    let format = &run.format;
    if format.font.is_some() || format.east_asia_font.is_some() {
        let mut fonts = RunFonts::new();
        if let Some(font) = &format.font {
            fonts = fonts.ascii(font).hi_ansi(font);
        }
        if let Some(font) = &format.east_asia_font {
            fonts = fonts.east_asia(font);
        }
        docx_run = docx_run.fonts(fonts);
    }
    if let Some(points) = format.size {
        docx_run = docx_run.size(half_points(points));
    }
    if let Some(color) = format.color {
        docx_run = docx_run.color(color.to_hex());
    }
    docx_run = match format.bold {
        Some(true) => docx_run.bold(),
        Some(false) => docx_run.disable_bold(),
        None => docx_run,
    };
    match format.italic {
        Some(true) => docx_run.italic(),
        Some(false) => docx_run.disable_italic(),
        None => docx_run,
    }
}

/// Word sizes runs in half-points
fn half_points(points: f64) -> usize {
    (points * 2.0).round().max(1.0) as usize
}
