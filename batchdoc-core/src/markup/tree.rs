//! Markup tree produced from Markdown-derived HTML.
//!
//! Nodes follow the element/text/tail layout: `text` is the text before the first child,
//! and each child's `tail` is the text between that child and the next one. Text nodes are
//! never children, which is what lets the renderers walk elements only.

/// Element kinds the converter knows about.
///
/// Anything else lands in [`Tag::Other`] with its original name, so the renderers' fallback
/// branches are explicit rather than a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Synthetic wrapper around a parsed fragment
    Root,
    Paragraph,
    /// `h1` to `h6`
    Heading(usize),
    UnorderedList,
    OrderedList,
    ListItem,
    /// Code block (`pre`)
    Pre,
    Table,
    TableHead,
    TableBody,
    TableRow,
    /// `th`
    HeaderCell,
    /// `td`
    DataCell,
    /// `strong` or `b`
    Strong,
    /// `em` or `i`
    Emphasis,
    Code,
    /// `a`
    Link,
    /// `br`
    LineBreak,
    Other(String),
}

impl Tag {
    pub fn from_name(name: &str) -> Tag {
        match name {
            "root" => Tag::Root,
            "p" => Tag::Paragraph,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                Tag::Heading(usize::from(name.as_bytes()[1] - b'0'))
            }
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "pre" => Tag::Pre,
            "table" => Tag::Table,
            "thead" => Tag::TableHead,
            "tbody" => Tag::TableBody,
            "tr" => Tag::TableRow,
            "th" => Tag::HeaderCell,
            "td" => Tag::DataCell,
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "code" => Tag::Code,
            "a" => Tag::Link,
            "br" => Tag::LineBreak,
            other => Tag::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Root => "root",
            Tag::Paragraph => "p",
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Pre => "pre",
            Tag::Table => "table",
            Tag::TableHead => "thead",
            Tag::TableBody => "tbody",
            Tag::TableRow => "tr",
            Tag::HeaderCell => "th",
            Tag::DataCell => "td",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::Code => "code",
            Tag::Link => "a",
            Tag::LineBreak => "br",
            Tag::Other(name) => name,
        }
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<Element>,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            text: None,
            tail: None,
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct text, if non-empty
    pub fn direct_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    /// Tail text, if non-empty
    pub fn tail_text(&self) -> Option<&str> {
        self.tail.as_deref().filter(|tail| !tail.is_empty())
    }

    /// Direct children with the given tag
    pub fn children_tagged(&self, tag: Tag) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// All text of the subtree, in document order, ignoring tags.
    ///
    /// The element's own tail is not part of its content and is left out.
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        if let Some(text) = &self.text {
            output.push_str(text);
        }
        for child in &self.children {
            child.collect_text(output);
            if let Some(tail) = &child.tail {
                output.push_str(tail);
            }
        }
    }
}
