//! Treeviz formatter for the document IR
//!
//! Treeviz is a visual, line based dump of the IR: one line per block, cell and run, with the
//! nesting drawn as a tree. It is meant for inspecting what an export produced without opening
//! a word processor, and it makes for readable snapshot tests.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label>
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ ¶ paragraph
//! │ └─ ◦ "Q1" [bold]
//! ├─ ▦ table 1x2
//! │ ├─ ▭ cell 0,0
//! │ │ └─ ◦ "1"
//! │ └─ ▭ cell 0,1
//! │   └─ ◦ "2"
//! └─ ⤓ page break
//!
//! Icons
//!     Document: ⧉
//!     Paragraph: ¶
//!     Heading: §
//!     Table: ▦
//!     Cell: ▭
//!     PageBreak: ⤓
//!     Run: ◦
//!
//! Run labels are the run text in quotes (escaped, never truncated) followed by the formatting
//! that is switched on: `bold`, `italic`, `font=`, `size=`, `color=`.

use crate::error::Result;
use crate::format::{Format, SerializedDocument};
use crate::ir::nodes::{Block, Document, Paragraph, Run};

/// One printed line and the lines nested under it
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: String) -> Self {
        Node {
            label,
            children: Vec::new(),
        }
    }
}

fn run_label(run: &Run) -> String {
    let format = &run.format;
    let mut flags = Vec::new();
    if format.is_bold() {
        flags.push("bold".to_string());
    }
    if format.is_italic() {
        flags.push("italic".to_string());
    }
    if let Some(font) = &format.font {
        flags.push(format!("font={font}"));
    }
    if let Some(size) = format.size {
        flags.push(format!("size={size}"));
    }
    if let Some(color) = format.color {
        flags.push(format!("color=#{}", color.to_hex()));
    }

    if flags.is_empty() {
        format!("◦ {:?}", run.text)
    } else {
        format!("◦ {:?} [{}]", run.text, flags.join(" "))
    }
}

fn run_nodes(runs: &[Run]) -> Vec<Node> {
    runs.iter().map(|run| Node::leaf(run_label(run))).collect()
}

fn paragraph_node(label: String, paragraph: &Paragraph) -> Node {
    Node {
        label,
        children: run_nodes(&paragraph.runs),
    }
}

fn block_node(block: &Block) -> Node {
    match block {
        Block::Paragraph(paragraph) => {
            let label = match &paragraph.style {
                Some(style) => format!("¶ paragraph ({style})"),
                None => "¶ paragraph".to_string(),
            };
            paragraph_node(label, paragraph)
        }
        Block::Heading(heading) => Node {
            label: format!("§ h{}", heading.level),
            children: run_nodes(&heading.runs),
        },
        Block::Table(table) => Node {
            label: format!("▦ table {}x{}", table.rows.len(), table.columns),
            children: table
                .rows
                .iter()
                .enumerate()
                .flat_map(|(row, cells)| {
                    cells.iter().enumerate().map(move |(column, cell)| {
                        paragraph_node(format!("▭ cell {row},{column}"), cell)
                    })
                })
                .collect(),
        },
        Block::PageBreak => Node::leaf("⤓ page break".to_string()),
    }
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == child_count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{prefix}{connector} {}\n", child.label));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(&child.children, &child_prefix, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("⧉ Document ({} blocks)\n", doc.blocks.len());
    let nodes: Vec<Node> = doc.blocks.iter().map(block_node).collect();
    format_children(&nodes, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation of the document blocks and runs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn serialize(&self, doc: &Document) -> Result<SerializedDocument> {
        Ok(SerializedDocument::Text(to_treeviz_str(doc)))
    }
}
