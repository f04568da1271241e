//! Property tests for style resolution and the converter.

use crate::common::convert;
use batchdoc_core::ir::nodes::Document;
use batchdoc_core::markup::{Element, Tag};
use batchdoc_core::render::MarkdownConverter;
use batchdoc_core::style::{Rgb, StyleDescriptor, StyleOverrides, StyleRegistry};
use proptest::option;
use proptest::prelude::*;

fn overrides() -> impl Strategy<Value = StyleOverrides> {
    (
        option::of("[A-Za-z ]{1,12}"),
        option::of(1.0f64..72.0),
        option::of(any::<(u8, u8, u8)>()),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
    )
        .prop_map(|(font_name, font_size, color, bold, italic)| StyleOverrides {
            font_name,
            font_size,
            font_color: color.map(|(r, g, b)| Rgb(r, g, b)),
            bold,
            italic,
        })
}

fn inline_tag() -> impl Strategy<Value = Tag> {
    prop_oneof![
        Just(Tag::Strong),
        Just(Tag::Emphasis),
        Just(Tag::Other("span".to_string())),
    ]
}

fn text() -> impl Strategy<Value = String> {
    "[a-z ]{0,6}"
}

fn inline_tree() -> impl Strategy<Value = Element> {
    let leaf = (inline_tag(), text(), text())
        .prop_map(|(tag, text, tail)| Element::new(tag).with_text(text).with_tail(tail));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            inline_tag(),
            text(),
            text(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, text, tail, children)| {
                children.into_iter().fold(
                    Element::new(tag).with_text(text).with_tail(tail),
                    Element::with_child,
                )
            })
    })
}

fn paragraph_tree() -> impl Strategy<Value = Element> {
    (text(), prop::collection::vec(inline_tree(), 0..4)).prop_map(|(text, children)| {
        children
            .into_iter()
            .fold(Element::new(Tag::Paragraph).with_text(text), Element::with_child)
    })
}

proptest! {
    #[test]
    fn missing_style_resolves_to_the_overrides(o in overrides()) {
        let resolved = StyleRegistry::new().resolve("missing", &o);
        prop_assert_eq!(resolved.font_name, o.font_name);
        prop_assert_eq!(resolved.font_size, o.font_size);
        prop_assert_eq!(resolved.font_color, o.font_color);
        prop_assert_eq!(resolved.bold, o.bold.unwrap_or(false));
        prop_assert_eq!(resolved.italic, o.italic.unwrap_or(false));
    }

    #[test]
    fn override_keys_win(base in overrides(), o in overrides()) {
        let base = StyleDescriptor::default().merge(&base);
        let registry = StyleRegistry::new().with_style("s", base.clone());
        let resolved = registry.resolve("s", &o);

        prop_assert_eq!(resolved.font_name, o.font_name.or(base.font_name));
        prop_assert_eq!(resolved.font_size, o.font_size.or(base.font_size));
        prop_assert_eq!(resolved.font_color, o.font_color.or(base.font_color));
        prop_assert_eq!(resolved.bold, o.bold.unwrap_or(base.bold));
        prop_assert_eq!(resolved.italic, o.italic.unwrap_or(base.italic));
    }

    #[test]
    fn leaf_text_appears_once_in_order(tree in paragraph_tree()) {
        let mut doc = Document::new();
        MarkdownConverter::default()
            .render_block(&mut doc, &tree, &StyleDescriptor::default(), None)
            .unwrap();

        let rendered: String = doc.runs().iter().map(|run| run.text.as_str()).collect();
        prop_assert_eq!(rendered, tree.text_content());
        prop_assert!(doc.runs().iter().all(|run| !run.text.is_empty()));
    }

    #[test]
    fn conversion_is_deterministic(source in "[a-z*_` \n#-]{0,40}") {
        prop_assert_eq!(convert(&source), convert(&source));
    }
}
