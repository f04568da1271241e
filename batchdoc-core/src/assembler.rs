//! Batch document assembly
//!
//!     Layout of an export:
//!
//!         for each succeeded record, in input order:
//!             paragraph: the prompt, one run in the "prompt" style
//!             the response Markdown, converted in the "response" style
//!             an empty paragraph
//!         if any record failed:
//!             page break
//!             level 1 heading: the annex title
//!             for each failed record, in input order:
//!                 "List Bullet" paragraph: the label
//!                 paragraph: the error payload
//!
//!     The whole document is built in memory before it is serialized, so an error anywhere
//!     (unparseable markup, an unprintable payload) aborts the export without output.

use crate::batch::{partition, BatchRecord, DEFAULT_SUCCESS_STATUS};
use crate::document::{DocumentModel, LIST_BULLET};
use crate::error::Result;
use crate::format::Format;
use crate::formats::DocxFormat;
use crate::ir::nodes::Document;
use crate::render::{ConverterOptions, MarkdownConverter};
use crate::style::{apply, StyleOverrides, StyleRegistry};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

pub const DEFAULT_ANNEX_TITLE: &str = "Failed Requests Annex";
pub const PROMPT_STYLE: &str = "prompt";
pub const RESPONSE_STYLE: &str = "response";

/// Export knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Status value that marks a record as succeeded
    pub success_status: String,
    /// Heading of the failed requests section
    pub annex_title: String,
    /// Registry style used for prompts
    pub prompt_style: String,
    /// Registry style used for responses
    pub response_style: String,
    pub converter: ConverterOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            success_status: DEFAULT_SUCCESS_STATUS.to_string(),
            annex_title: DEFAULT_ANNEX_TITLE.to_string(),
            prompt_style: PROMPT_STYLE.to_string(),
            response_style: RESPONSE_STYLE.to_string(),
            converter: ConverterOptions::default(),
        }
    }
}

/// Lays out classified batch records on a document
pub struct Assembler<'a> {
    styles: &'a StyleRegistry,
    options: &'a ExportOptions,
    converter: MarkdownConverter,
}

impl<'a> Assembler<'a> {
    pub fn new(styles: &'a StyleRegistry, options: &'a ExportOptions) -> Self {
        Self {
            styles,
            options,
            converter: MarkdownConverter::new(options.converter.clone()),
        }
    }

    pub fn assemble(&self, doc: &mut dyn DocumentModel, records: &[BatchRecord]) -> Result<()> {
        let (succeeded, failed) = partition(records);
        debug!(
            "assembling {} succeeded and {} failed records",
            succeeded.len(),
            failed.len()
        );

        for name in [&self.options.prompt_style, &self.options.response_style] {
            if self.styles.get(name).is_none() {
                warn!("style '{name}' is not registered, using defaults");
            }
        }

        let prompt_style = self
            .styles
            .resolve(&self.options.prompt_style, &StyleOverrides::default());
        let response_style = self
            .styles
            .resolve(&self.options.response_style, &StyleOverrides::default());

        for record in succeeded {
            if let BatchRecord::Succeeded { prompt, response } = record {
                let paragraph = doc.add_paragraph(None);
                let run = doc.add_run(paragraph, prompt)?;
                apply(doc, run, &prompt_style)?;

                self.converter.convert(doc, response, &response_style)?;
                doc.add_paragraph(None);
            }
        }

        if failed.is_empty() {
            return Ok(());
        }

        doc.add_page_break();
        let heading = doc.add_heading(1);
        doc.add_run(heading, &self.options.annex_title)?;

        for record in failed {
            if let BatchRecord::Failed { label, error } = record {
                let payload = error.render()?;

                let item = doc.add_paragraph(Some(LIST_BULLET));
                if !label.is_empty() {
                    doc.add_run(item, label)?;
                }
                let details = doc.add_paragraph(None);
                if !payload.is_empty() {
                    doc.add_run(details, &payload)?;
                }
            }
        }

        Ok(())
    }
}

/// Build the IR document for `records`.
pub fn build_document(
    records: &[BatchRecord],
    styles: &StyleRegistry,
    options: &ExportOptions,
) -> Result<Document> {
    let mut doc = Document::new();
    Assembler::new(styles, options).assemble(&mut doc, records)?;
    Ok(doc)
}

/// Export `records` as a DOCX document with default options.
///
/// The returned cursor is positioned at the start of the bytes.
pub fn export(records: &[BatchRecord], styles: &StyleRegistry) -> Result<Cursor<Vec<u8>>> {
    export_with(records, styles, &ExportOptions::default(), &DocxFormat)
}

/// Export `records` with explicit options and output format.
pub fn export_with(
    records: &[BatchRecord],
    styles: &StyleRegistry,
    options: &ExportOptions,
    format: &dyn Format,
) -> Result<Cursor<Vec<u8>>> {
    let doc = build_document(records, styles, options)?;
    let bytes = format.serialize(&doc)?.into_bytes();
    info!(
        "exported {} records as {} ({} bytes)",
        records.len(),
        format.name(),
        bytes.len()
    );
    Ok(Cursor::new(bytes))
}
