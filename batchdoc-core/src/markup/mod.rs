//! Markdown-derived markup
//!
//! Responses arrive as Markdown. They are rendered to HTML and read back as an element tree
//! ([`tree::Element`]) that the renderers in ./render walk.

pub mod parser;
pub mod tree;

pub use parser::{parse_fragment, parse_markdown, render_html};
pub use tree::{Element, Tag};
