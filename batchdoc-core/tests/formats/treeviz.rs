use crate::common::convert;
use batchdoc_core::assembler::{build_document, ExportOptions};
use batchdoc_core::batch::{BatchRecord, ErrorPayload};
use batchdoc_core::formats::treeviz::to_treeviz_str;
use batchdoc_core::style::{StyleDescriptor, StyleRegistry};
use insta::assert_snapshot;
use serde_json::json;

#[test]
fn test_treeviz_batch_layout() {
    let styles = StyleRegistry::new().with_style(
        "prompt",
        StyleDescriptor {
            bold: true,
            ..StyleDescriptor::default()
        },
    );
    let records = vec![
        BatchRecord::succeeded("Q1", "**bold** text\n\n- item"),
        BatchRecord::failed("Q2", ErrorPayload::Structured(json!({"code": 500}))),
    ];
    let doc = build_document(&records, &styles, &ExportOptions::default()).unwrap();

    assert_snapshot!(to_treeviz_str(&doc), @r#"
    ⧉ Document (8 blocks)
    ├─ ¶ paragraph
    │ └─ ◦ "Q1" [bold]
    ├─ ¶ paragraph
    │ ├─ ◦ "bold" [bold]
    │ └─ ◦ " text"
    ├─ ¶ paragraph (List Bullet)
    │ └─ ◦ "item"
    ├─ ¶ paragraph
    ├─ ⤓ page break
    ├─ § h1
    │ └─ ◦ "Failed Requests Annex"
    ├─ ¶ paragraph (List Bullet)
    │ └─ ◦ "Q2"
    └─ ¶ paragraph
      └─ ◦ "{\n  \"code\": 500\n}"
    "#);
}

#[test]
fn test_treeviz_table() {
    let doc = convert("| a | b |\n|---|---|\n| 1 | *2* |\n");

    assert_snapshot!(to_treeviz_str(&doc), @r#"
    ⧉ Document (1 blocks)
    └─ ▦ table 1x2
      ├─ ▭ cell 0,0
      │ └─ ◦ "1"
      └─ ▭ cell 0,1
        └─ ◦ "2" [italic]
    "#);
}
