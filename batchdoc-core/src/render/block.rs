//! Block rendering: markup element → paragraphs, headings and tables

use super::{append_run, MarkdownConverter};
use crate::document::{DocumentModel, LIST_BULLET, LIST_NUMBER};
use crate::error::Result;
use crate::markup::{Element, Tag};
use crate::style::{force_font, StyleDescriptor};
use log::{debug, trace};

/// Paragraph style for the items of a list element
fn list_style(tag: &Tag) -> Option<&'static str> {
    match tag {
        Tag::UnorderedList => Some(LIST_BULLET),
        Tag::OrderedList => Some(LIST_NUMBER),
        _ => None,
    }
}

impl MarkdownConverter {
    /// Render one block element, appending to `doc`.
    ///
    /// `list_hint` is the paragraph style for list items, chosen by the immediate parent list.
    pub fn render_block(
        &self,
        doc: &mut dyn DocumentModel,
        node: &Element,
        style: &StyleDescriptor,
        list_hint: Option<&str>,
    ) -> Result<()> {
        match &node.tag {
            Tag::Paragraph | Tag::ListItem => {
                let paragraph = doc.add_paragraph(list_hint);
                self.render_inline(doc, paragraph, node, style)?;

                // Nested lists come out flat, as paragraphs after the item's own text.
                for child in &node.children {
                    if let Some(hint) = list_style(&child.tag) {
                        self.render_block(doc, child, style, Some(hint))?;
                    }
                }
            }
            Tag::Heading(level) => {
                let heading = doc.add_heading(*level);
                self.render_inline(doc, heading, node, style)?;
            }
            Tag::UnorderedList | Tag::OrderedList => {
                let hint = list_style(&node.tag);
                for item in node.children_tagged(Tag::ListItem) {
                    self.render_block(doc, item, style, hint)?;
                }
            }
            Tag::Pre => {
                let code = node.text_content();
                let paragraph = doc.add_paragraph(None);
                let run = append_run(doc, paragraph, code.trim(), style)?;
                force_font(doc, run, &self.options.code_font)?;
            }
            Tag::Table => self.render_table(doc, node, style)?,
            _ => {
                if node.direct_text().is_some() {
                    let paragraph = doc.add_paragraph(None);
                    self.render_inline(doc, paragraph, node, style)?;
                } else {
                    trace!("skipping <{}> without text", node.tag.name());
                }
            }
        }

        Ok(())
    }

    /// Tables take their shape from the first row and are filled cell by cell.
    ///
    /// Cells past the first row's column count are dropped; short rows leave empty cells.
    fn render_table(
        &self,
        doc: &mut dyn DocumentModel,
        node: &Element,
        style: &StyleDescriptor,
    ) -> Result<()> {
        let rows = self.table_rows(node);
        let Some(first) = rows.first() else {
            debug!("skipping table without rows");
            return Ok(());
        };

        let columns = row_cells(first).len();
        if columns == 0 {
            debug!("skipping table whose first row has no cells");
            return Ok(());
        }

        let table = doc.add_table(rows.len(), columns);
        for (row_index, row) in rows.iter().enumerate() {
            let cells = row_cells(row);
            if cells.len() > columns {
                debug!(
                    "table row {row_index} has {} cells, keeping the first {columns}",
                    cells.len()
                );
            }
            for (column, cell) in cells.into_iter().take(columns).enumerate() {
                let paragraph = doc.cell(table, row_index, column)?;
                self.render_inline(doc, paragraph, cell, style)?;
            }
        }

        Ok(())
    }

    /// Rows of a table: `tr` elements directly under the table or its `tbody`. The `thead`
    /// row belongs to the table syntax and is only kept when configured.
    fn table_rows<'a>(&self, table: &'a Element) -> Vec<&'a Element> {
        let mut rows = Vec::new();
        for child in &table.children {
            match &child.tag {
                Tag::TableRow => rows.push(child),
                Tag::TableBody => rows.extend(child.children_tagged(Tag::TableRow)),
                Tag::TableHead if self.options.include_table_header => {
                    rows.extend(child.children_tagged(Tag::TableRow))
                }
                _ => {}
            }
        }
        rows
    }
}

/// Header cells when the row has any, data cells otherwise
fn row_cells(row: &Element) -> Vec<&Element> {
    let headers: Vec<&Element> = row.children_tagged(Tag::HeaderCell).collect();
    if headers.is_empty() {
        row.children_tagged(Tag::DataCell).collect()
    } else {
        headers
    }
}
