//! Markdown to document conversion
//!
//!     This is the core of the crate: a recursive walk over the markup tree that turns
//!     elements into document primitives.
//!
//!     - [`MarkdownConverter::render_block`] (./block.rs) dispatches block elements: paragraphs,
//!       list items, headings, lists, code blocks, tables, and a plain-text fallback.
//!     - [`MarkdownConverter::render_inline`] (./inline.rs) flattens inline markup into an
//!       ordered sequence of runs on one paragraph.
//!
//!     The document model has no notion of nested runs, so nesting is resolved on the way down:
//!     every recursion step receives the accumulated [`StyleDescriptor`] and derives a new one
//!     with [`StyleDescriptor::merge`] when it enters `strong` or `em`. Nothing is mutated in
//!     place, and siblings never see each other's emphasis.
//!
//! Element Mapping
//!
//!     | Markup            | Document                                                   |
//!     |-------------------|------------------------------------------------------------|
//!     | p                 | paragraph                                                  |
//!     | li                | paragraph styled "List Bullet" / "List Number"             |
//!     | h1..h6            | heading at the same level                                  |
//!     | ul / ol           | one paragraph per item (nested lists follow as siblings)   |
//!     | pre               | one paragraph, one run, code font                          |
//!     | table             | table of body rows × first-row cells                       |
//!     | strong, b         | runs with bold on                                          |
//!     | em, i             | runs with italic on                                        |
//!     | code              | one run in the code font                                   |
//!     | a                 | link text, then " (href)" when it differs                  |
//!     | other             | block: paragraph if it has text; inline: transparent       |

mod block;
mod inline;

use crate::document::{DocumentModel, ParagraphRef, RunRef};
use crate::error::Result;
use crate::markup::parse_markdown;
use crate::style::{apply, StyleDescriptor};
use log::debug;
use serde::{Deserialize, Serialize};

/// Monospace font used for code spans and code blocks unless configured otherwise
pub const DEFAULT_CODE_FONT: &str = "Consolas";

/// Converter knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Font forced onto code spans and code blocks
    pub code_font: String,
    /// Keep the Markdown table header row as the first table row
    pub include_table_header: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            code_font: DEFAULT_CODE_FONT.to_string(),
            include_table_header: false,
        }
    }
}

/// Converts Markdown text into document blocks
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConverterOptions,
}

impl MarkdownConverter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Convert `markdown` and append the resulting blocks to `doc`, styled with `style`.
    ///
    /// Empty input is a no-op. Markup that does not parse as a tree aborts the conversion.
    pub fn convert(
        &self,
        doc: &mut dyn DocumentModel,
        markdown: &str,
        style: &StyleDescriptor,
    ) -> Result<()> {
        if markdown.is_empty() {
            return Ok(());
        }

        let blocks = parse_markdown(markdown)?;
        debug!("converting {} top-level markdown blocks", blocks.len());
        for block in &blocks {
            self.render_block(doc, block, style, None)?;
        }
        Ok(())
    }
}

/// Append a run of `text` to `paragraph` and apply `style` to it.
fn append_run(
    doc: &mut dyn DocumentModel,
    paragraph: ParagraphRef,
    text: &str,
    style: &StyleDescriptor,
) -> Result<RunRef> {
    let run = doc.add_run(paragraph, text)?;
    apply(doc, run, style)?;
    Ok(run)
}
