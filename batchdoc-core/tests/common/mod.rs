//! Shared helpers for the integration tests.

use batchdoc_core::ir::nodes::{Document, Run};
use batchdoc_core::render::MarkdownConverter;
use batchdoc_core::style::StyleDescriptor;

/// Convert Markdown into a fresh document with the default converter.
pub fn convert(markdown: &str) -> Document {
    convert_styled(markdown, &StyleDescriptor::default())
}

pub fn convert_styled(markdown: &str, style: &StyleDescriptor) -> Document {
    let mut doc = Document::new();
    MarkdownConverter::default()
        .convert(&mut doc, markdown, style)
        .expect("markdown should convert");
    doc
}

/// Run texts, in order
pub fn texts(runs: &[Run]) -> Vec<&str> {
    runs.iter().map(|run| run.text.as_str()).collect()
}
