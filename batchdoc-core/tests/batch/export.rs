use batchdoc_core::assembler::{build_document, export, ExportOptions, DEFAULT_ANNEX_TITLE};
use batchdoc_core::batch::{load_batch, BatchRecord, ErrorPayload, DEFAULT_SUCCESS_STATUS};
use batchdoc_core::document::LIST_BULLET;
use batchdoc_core::error::ExportError;
use batchdoc_core::ir::nodes::{Block, Document};
use batchdoc_core::style::{StyleDescriptor, StyleRegistry};
use serde_json::json;
use std::io::Read;

fn registry() -> StyleRegistry {
    serde_json::from_value(json!({
        "prompt": {"font_name": "Calibri", "font_size": 12, "is_bold": true},
        "response": {"font_name": "Calibri", "font_size": 11}
    }))
    .unwrap()
}

fn build(records: &[BatchRecord]) -> Document {
    build_document(records, &registry(), &ExportOptions::default()).unwrap()
}

#[test]
fn test_prompt_and_response() {
    let doc = build(&[BatchRecord::succeeded("Q1", "**bold** text")]);
    let paragraphs: Vec<_> = doc.paragraphs().collect();

    let prompt = &paragraphs[0].runs[0];
    assert_eq!(prompt.text, "Q1");
    assert!(prompt.format.is_bold());
    assert_eq!(prompt.format.size, Some(12.0));

    let response = &paragraphs[1].runs;
    assert_eq!(response[0].text, "bold");
    assert!(response[0].format.is_bold());
    assert_eq!(response[1].text, " text");
    assert!(!response[1].format.is_bold());
    assert_eq!(response[1].format.size, Some(11.0));
    assert_eq!(response[1].format.font.as_deref(), Some("Calibri"));

    assert!(paragraphs[2].runs.is_empty());
}

#[test]
fn test_failed_request_annex() {
    let doc = build(&[BatchRecord::failed(
        "Q2",
        ErrorPayload::Structured(json!({"code": 500})),
    )]);

    assert!(matches!(doc.blocks[0], Block::PageBreak));
    assert!(matches!(&doc.blocks[1], Block::Heading(h) if h.level == 1 && h.text() == DEFAULT_ANNEX_TITLE));
    assert!(matches!(&doc.blocks[2], Block::Paragraph(p) if p.style.as_deref() == Some(LIST_BULLET) && p.text() == "Q2"));
    assert!(matches!(&doc.blocks[3], Block::Paragraph(p) if p.text() == "{\n  \"code\": 500\n}"));
    assert_eq!(doc.blocks.len(), 4);
}

#[test]
fn test_table_response() {
    let doc = build(&[BatchRecord::succeeded("Q", "| a | b |\n|---|---|\n| 1 | 2 |")]);
    let table = doc.tables().next().unwrap();
    assert_eq!((table.rows.len(), table.columns), (1, 2));
    assert_eq!(table.cell(0, 0).unwrap().text(), "1");
    assert_eq!(table.cell(0, 1).unwrap().text(), "2");
}

#[test]
fn test_mixed_batch_from_raw_input() {
    let source = r#"[
        {"status": "succeeded", "prompt_text": "A", "clean_response": "alpha"},
        {"status": "errored", "custom_id": "req-b", "error": "timeout"},
        {"status": "succeeded", "prompt_text": "C", "response": "gamma"},
        {"status": "expired", "prompt_text": "D", "error": {"code": 429}},
        {"status": "succeeded", "prompt_text": "E", "clean_response": "epsilon"}
    ]"#;
    let records = load_batch(source, DEFAULT_SUCCESS_STATUS).unwrap();
    let doc = build(&records);

    let breaks: Vec<usize> = doc
        .blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| matches!(block, Block::PageBreak))
        .map(|(index, _)| index)
        .collect();
    assert_eq!(breaks.len(), 1);
    let break_at = breaks[0];

    let headings = doc
        .blocks
        .iter()
        .filter(|block| matches!(block, Block::Heading(_)))
        .count();
    assert_eq!(headings, 1);
    assert!(matches!(&doc.blocks[break_at + 1], Block::Heading(h) if h.text() == DEFAULT_ANNEX_TITLE));

    let texts = |blocks: &[Block]| -> Vec<String> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.text()),
                _ => None,
            })
            .collect()
    };
    assert_eq!(
        texts(&doc.blocks[..break_at]),
        vec!["A", "alpha", "", "C", "gamma", "", "E", "epsilon", ""]
    );
    assert_eq!(
        texts(&doc.blocks[break_at + 1..]),
        vec!["req-b", "timeout", "D", "{\n  \"code\": 429\n}"]
    );

    let labels: Vec<String> = doc.blocks[break_at + 1..]
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) if p.style.as_deref() == Some(LIST_BULLET) => Some(p.text()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["req-b", "D"]);
}

#[test]
fn test_markup_failure_aborts_the_export() {
    let records = [
        BatchRecord::succeeded("Q1", "fine"),
        BatchRecord::succeeded("Q2", "hello \u{1b}[31m red"),
        BatchRecord::failed("Q3", "boom".into()),
    ];

    let result = build_document(&records, &registry(), &ExportOptions::default());
    assert!(matches!(result, Err(ExportError::Markup(_))));
    assert!(matches!(export(&records, &registry()), Err(ExportError::Markup(_))));
}

#[test]
fn test_unknown_styles_fall_back_to_defaults() {
    let doc = build_document(
        &[BatchRecord::succeeded("Q", "A")],
        &StyleRegistry::new(),
        &ExportOptions::default(),
    )
    .unwrap();
    let prompt = &doc.paragraphs().next().unwrap().runs[0];
    assert_eq!(prompt.format.bold, Some(false));
    assert_eq!(prompt.format.font, None);
}

#[test]
fn test_custom_style_names() {
    let styles = StyleRegistry::new().with_style(
        "question",
        StyleDescriptor {
            italic: true,
            ..StyleDescriptor::default()
        },
    );
    let options = ExportOptions {
        prompt_style: "question".to_string(),
        ..ExportOptions::default()
    };
    let doc = build_document(&[BatchRecord::succeeded("Q", "")], &styles, &options).unwrap();
    assert!(doc.paragraphs().next().unwrap().runs[0].format.is_italic());
}

#[test]
fn test_export_is_a_docx_stream() {
    let mut cursor = export(&[BatchRecord::succeeded("Q1", "A")], &registry()).unwrap();
    assert_eq!(cursor.position(), 0);

    let mut bytes = Vec::new();
    cursor.read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
