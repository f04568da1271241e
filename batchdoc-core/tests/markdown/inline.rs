use crate::common::{convert, convert_styled, texts};
use batchdoc_core::style::{Rgb, StyleDescriptor};

#[test]
fn test_bold_run_does_not_leak() {
    let doc = convert("**bold** text");
    let paragraph = doc.paragraphs().next().unwrap();

    assert_eq!(texts(&paragraph.runs), vec!["bold", " text"]);
    assert!(paragraph.runs[0].format.is_bold());
    assert_eq!(paragraph.runs[1].format.bold, Some(false));
    assert_eq!(paragraph.runs[1].format.italic, Some(false));
}

#[test]
fn test_italic_and_bold_inside_one_paragraph() {
    let doc = convert("plain *it* and __strong__.");
    let runs = &doc.paragraphs().next().unwrap().runs;

    assert_eq!(texts(runs), vec!["plain ", "it", " and ", "strong", "."]);
    assert!(runs[1].format.is_italic() && !runs[1].format.is_bold());
    assert!(runs[3].format.is_bold() && !runs[3].format.is_italic());
}

#[test]
fn test_nested_emphasis_merges() {
    let doc = convert("**bold *both***");
    let runs = &doc.paragraphs().next().unwrap().runs;

    assert_eq!(texts(runs), vec!["bold ", "both"]);
    assert!(runs[0].format.is_bold() && !runs[0].format.is_italic());
    assert!(runs[1].format.is_bold() && runs[1].format.is_italic());
}

#[test]
fn test_style_applies_to_every_run() {
    let style = StyleDescriptor {
        font_name: Some("Georgia".to_string()),
        font_size: Some(11.0),
        font_color: Some(Rgb(10, 20, 30)),
        ..StyleDescriptor::default()
    };
    let doc = convert_styled("a **b** `c`", &style);
    let runs = &doc.paragraphs().next().unwrap().runs;

    assert_eq!(texts(runs), vec!["a ", "b", " ", "c"]);
    for run in runs.iter() {
        assert_eq!(run.format.size, Some(11.0));
        assert_eq!(run.format.color, Some(Rgb(10, 20, 30)));
    }
    assert_eq!(runs[1].format.font.as_deref(), Some("Georgia"));
    assert_eq!(runs[3].format.font.as_deref(), Some("Consolas"));
}

#[test]
fn test_inline_code_uses_code_font() {
    let doc = convert("Use `cargo` now");
    let runs = &doc.paragraphs().next().unwrap().runs;

    assert_eq!(texts(runs), vec!["Use ", "cargo", " now"]);
    assert_eq!(runs[1].format.font.as_deref(), Some("Consolas"));
    assert_eq!(runs[1].format.east_asia_font.as_deref(), Some("Consolas"));
    assert_eq!(runs[2].format.font, None);
}

#[test]
fn test_link_target_is_appended() {
    let doc = convert("See [the docs](https://example.com/docs).");
    let paragraph = doc.paragraphs().next().unwrap();

    assert_eq!(paragraph.text(), "See the docs (https://example.com/docs).");
}

#[test]
fn test_autolink_is_not_repeated() {
    let doc = convert("<https://example.com>");
    assert_eq!(doc.paragraphs().next().unwrap().text(), "https://example.com");
}

#[test]
fn test_escaped_characters_survive() {
    let doc = convert("a < b && \"c\"");
    assert_eq!(doc.paragraphs().next().unwrap().text(), "a < b && \"c\"");
}

#[test]
fn test_hard_break_is_a_newline_run() {
    let doc = convert("one  \ntwo");
    let runs = &doc.paragraphs().next().unwrap().runs;
    assert_eq!(runs[0].text, "one");
    assert_eq!(runs[1].text, "\n");
    assert!(runs[2].text.ends_with("two"));
}

#[test]
fn test_raw_html_is_dropped() {
    let doc = convert("before <span>x</span> after");
    assert_eq!(doc.paragraphs().next().unwrap().text(), "before x after");
}
