//! Inline rendering: markup subtree → runs on one paragraph

use super::{append_run, MarkdownConverter};
use crate::document::{DocumentModel, ParagraphRef};
use crate::error::Result;
use crate::markup::{Element, Tag};
use crate::style::{force_font, StyleDescriptor, StyleOverrides};
use log::trace;

impl MarkdownConverter {
    /// Render the content of `node` (its text and children, not its tail) into `paragraph`.
    pub fn render_inline(
        &self,
        doc: &mut dyn DocumentModel,
        paragraph: ParagraphRef,
        node: &Element,
        style: &StyleDescriptor,
    ) -> Result<()> {
        if let Some(text) = node.direct_text() {
            append_run(doc, paragraph, text, style)?;
        }

        for child in &node.children {
            match &child.tag {
                Tag::Strong => {
                    let bold = style.merge(&StyleOverrides::bold());
                    self.render_inline(doc, paragraph, child, &bold)?;
                }
                Tag::Emphasis => {
                    let italic = style.merge(&StyleOverrides::italic());
                    self.render_inline(doc, paragraph, child, &italic)?;
                }
                Tag::Code => {
                    let run = append_run(doc, paragraph, &child.text_content(), style)?;
                    force_font(doc, run, &self.options.code_font)?;
                }
                Tag::Link => self.render_link(doc, paragraph, child, style)?,
                Tag::LineBreak => {
                    append_run(doc, paragraph, "\n", style)?;
                }
                // Nested lists are block content; the block renderer emits them as sibling
                // paragraphs after this one.
                Tag::UnorderedList | Tag::OrderedList => {
                    trace!("leaving nested <{}> to the block renderer", child.tag.name());
                }
                _ => self.render_inline(doc, paragraph, child, style)?,
            }

            if let Some(tail) = child.tail_text() {
                append_run(doc, paragraph, tail, style)?;
            }
        }

        Ok(())
    }

    /// Links are plain text: the visible text, then the target in parentheses when it adds
    /// information.
    fn render_link(
        &self,
        doc: &mut dyn DocumentModel,
        paragraph: ParagraphRef,
        link: &Element,
        style: &StyleDescriptor,
    ) -> Result<()> {
        self.render_inline(doc, paragraph, link, style)?;

        let visible = link.text_content();
        if let Some(href) = link
            .attribute("href")
            .filter(|href| !href.is_empty() && *href != visible)
        {
            append_run(doc, paragraph, &format!(" ({href})"), style)?;
        }
        Ok(())
    }
}
