use crate::common::{convert, texts};
use batchdoc_core::document::{LIST_BULLET, LIST_NUMBER};
use batchdoc_core::ir::nodes::Block;
use batchdoc_core::markup::parse_markdown;
use batchdoc_core::render::{ConverterOptions, MarkdownConverter};
use batchdoc_core::style::StyleDescriptor;
use batchdoc_core::ir::nodes::Document;

#[test]
fn test_empty_input_is_a_no_op() {
    assert!(convert("").blocks.is_empty());
}

#[test]
fn test_paragraphs_in_order() {
    let doc = convert("first\n\nsecond\n\nthird");
    let found: Vec<_> = doc.paragraphs().map(|p| p.text()).collect();
    assert_eq!(found, vec!["first", "second", "third"]);
}

#[test]
fn test_headings() {
    let doc = convert("# Top\n\n### Third *level*");
    match &doc.blocks[..] {
        [Block::Heading(top), Block::Heading(third)] => {
            assert_eq!((top.level, top.text()), (1, "Top".to_string()));
            assert_eq!(third.level, 3);
            assert_eq!(texts(&third.runs), vec!["Third ", "level"]);
            assert!(third.runs[1].format.is_italic());
        }
        other => panic!("unexpected blocks: {other:?}"),
    }
}

#[test]
fn test_bullet_and_numbered_lists() {
    let doc = convert("- a\n- b\n\n1. one\n2. two\n");
    let found: Vec<_> = doc
        .paragraphs()
        .map(|p| (p.style.clone(), p.text()))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some(LIST_BULLET.to_string()), "a".to_string()),
            (Some(LIST_BULLET.to_string()), "b".to_string()),
            (Some(LIST_NUMBER.to_string()), "one".to_string()),
            (Some(LIST_NUMBER.to_string()), "two".to_string()),
        ]
    );
}

#[test]
fn test_nested_list_follows_its_parent_item() {
    let doc = convert("1. outer\n   - inner\n2. next\n");
    let found: Vec<_> = doc
        .paragraphs()
        .map(|p| (p.style.clone(), p.text().trim().to_string()))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some(LIST_NUMBER.to_string()), "outer".to_string()),
            (Some(LIST_BULLET.to_string()), "inner".to_string()),
            (Some(LIST_NUMBER.to_string()), "next".to_string()),
        ]
    );
    // The nested item's text is not repeated in its parent.
    assert!(!doc.paragraphs().next().unwrap().text().contains("inner"));
}

#[test]
fn test_fenced_code_block() {
    let doc = convert("```rust\nfn main() {\n    run();\n}\n```\n");
    let paragraph = doc.paragraphs().next().unwrap();

    assert_eq!(paragraph.runs.len(), 1);
    assert_eq!(paragraph.runs[0].text, "fn main() {\n    run();\n}");
    assert_eq!(paragraph.runs[0].format.font.as_deref(), Some("Consolas"));
    assert_eq!(paragraph.style, None);
}

#[test]
fn test_code_font_option() {
    let mut doc = Document::new();
    MarkdownConverter::new(ConverterOptions {
        code_font: "Fira Mono".to_string(),
        ..ConverterOptions::default()
    })
    .convert(&mut doc, "`x`\n\n```\ny\n```", &StyleDescriptor::default())
    .unwrap();

    let fonts: Vec<_> = doc
        .runs()
        .iter()
        .map(|run| run.format.font.clone())
        .collect();
    assert_eq!(fonts, vec![Some("Fira Mono".to_string()); 2]);
}

#[test]
fn test_thematic_break_is_ignored() {
    let doc = convert("above\n\n---\n\nbelow");
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn test_converting_twice_is_identical() {
    let source = "# T\n\n- **a** `b`\n- [c](https://c.test)\n\n| x | y |\n|---|---|\n| 1 | *2* |\n";
    assert_eq!(convert(source), convert(source));
}

#[test]
fn test_markup_tree_of_a_response() {
    let elements = parse_markdown("para\n\n- item\n").unwrap();
    let tags: Vec<_> = elements.iter().map(|e| e.tag.name().to_string()).collect();
    assert_eq!(tags, vec!["p", "ul"]);
}
