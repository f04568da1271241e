//! Markdown → markup tree
//!
//! Pipeline: Markdown string → HTML fragment (comrak) → `<root>` wrapped XML tree (roxmltree)
//! → [`Element`] tree.
//!
//! The fragment is parsed as strict XML on purpose: comrak emits well-formed XHTML-style markup
//! (`<br />`, escaped entities, raw HTML omitted), so anything that fails to parse is a real
//! defect and is reported instead of silently dropping content.

use super::tree::{Element, Tag};
use crate::error::{ExportError, Result};
use comrak::{markdown_to_html, Options};
use log::trace;
use roxmltree::Node;

/// Deepest element nesting accepted in a rendered fragment.
///
/// The XML parser, the tree builder and the renderers all recurse once per level, so deeper
/// input is rejected before parsing instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Render Markdown to an HTML fragment with the table extension enabled.
///
/// Fenced code blocks are part of CommonMark and need no extension.
pub fn render_html(source: &str) -> String {
    markdown_to_html(source, &default_comrak_options())
}

fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    // Raw HTML in responses is replaced by a comment rather than passed through, which keeps
    // the fragment well-formed.
    options.render.unsafe_ = false;
    options
}

/// Parse an HTML fragment into the top-level elements of a synthetic root.
pub fn parse_fragment(html: &str) -> Result<Vec<Element>> {
    let depth = nesting_depth(html);
    if depth > MAX_NESTING_DEPTH {
        return Err(ExportError::Markup(format!(
            "nesting too deep: {depth} levels, at most {MAX_NESTING_DEPTH}"
        )));
    }

    let wrapped = format!("<root>{html}</root>");
    let doc = roxmltree::Document::parse(&wrapped)
        .map_err(|e| ExportError::Markup(format!("fragment does not parse as a tree: {e}")))?;

    let root = build_element(doc.root_element());
    trace!("parsed fragment into {} top-level elements", root.children.len());
    Ok(root.children)
}

/// Parse Markdown straight into top-level elements.
pub fn parse_markdown(source: &str) -> Result<Vec<Element>> {
    parse_fragment(&render_html(source))
}

/// Deepest element nesting of an HTML fragment as comrak writes it: text is escaped, void
/// elements are self-closed and comments carry no markup.
fn nesting_depth(html: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let end = rest.find('>').unwrap_or(rest.len());
        let tag = &rest[..end];
        rest = &rest[end..];

        if tag.starts_with('/') {
            depth = depth.saturating_sub(1);
        } else if !(tag.starts_with('!') || tag.starts_with('?') || tag.ends_with('/')) {
            depth += 1;
            deepest = deepest.max(depth);
        }
    }
    deepest
}

fn build_element(node: Node) -> Element {
    let mut element = Element::new(Tag::from_name(node.tag_name().name()));
    element.attributes = node
        .attributes()
        .map(|attribute| (attribute.name().to_string(), attribute.value().to_string()))
        .collect();

    // Text (and comments, which are dropped) between elements is buffered and attached either
    // as the element's text or as the tail of the previous child.
    let mut pending = String::new();
    for child in node.children() {
        if child.is_element() {
            attach_text(&mut element, &mut pending);
            element.children.push(build_element(child));
        } else if child.is_text() {
            pending.push_str(child.text().unwrap_or_default());
        }
    }
    attach_text(&mut element, &mut pending);

    element
}

fn attach_text(element: &mut Element, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    let slot = match element.children.last_mut() {
        Some(previous) => &mut previous.tail,
        None => &mut element.text,
    };
    match slot {
        Some(existing) => existing.push_str(&text),
        None => *slot = Some(text),
    }
}
