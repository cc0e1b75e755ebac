//! Document node types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::Mark;

/// Attribute map carried by nodes and marks.
///
/// Values are JSON primitives (strings, numbers, booleans, null).
pub type Attrs = Map<String, Value>;

/// Attribute key holding a font identifier.
pub const FONT_ID_ATTR: &str = "fontId";

/// Node type tag.
///
/// The public vocabulary is closed. `LinkNode` is the name the editor engine
/// uses for [`NodeType::Link`]; it never appears in a public document.
/// Foreign tags are kept in `Other` so they survive JSON round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Document root
    Doc,
    /// Paragraph block
    Paragraph,
    /// Heading block (`attrs.level`)
    Heading,
    /// Unordered list
    BulletList,
    /// Ordered list (`attrs.start`)
    OrderedList,
    /// Item of either list kind
    ListItem,
    /// Image (`attrs.src`, `attrs.alt`, `attrs.title`)
    Image,
    /// Block-level link (`attrs.href`, `attrs.target`, `attrs.title`)
    Link,
    /// Preformatted code block
    CodeBlock,
    /// Text leaf
    Text,
    /// Engine-side name of `Link`
    LinkNode,
    /// Any tag outside the vocabulary
    Other(String),
}

impl NodeType {
    /// Every type of the public document vocabulary.
    pub const PUBLIC: [NodeType; 10] = [
        NodeType::Doc,
        NodeType::Paragraph,
        NodeType::Heading,
        NodeType::BulletList,
        NodeType::OrderedList,
        NodeType::ListItem,
        NodeType::Image,
        NodeType::Link,
        NodeType::CodeBlock,
        NodeType::Text,
    ];

    /// Resolve a type name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "doc" => NodeType::Doc,
            "paragraph" => NodeType::Paragraph,
            "heading" => NodeType::Heading,
            "bullet_list" => NodeType::BulletList,
            "ordered_list" => NodeType::OrderedList,
            "list_item" => NodeType::ListItem,
            "image" => NodeType::Image,
            "link" => NodeType::Link,
            "code_block" => NodeType::CodeBlock,
            "text" => NodeType::Text,
            "link_node" => NodeType::LinkNode,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// The serialized name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Doc => "doc",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading => "heading",
            NodeType::BulletList => "bullet_list",
            NodeType::OrderedList => "ordered_list",
            NodeType::ListItem => "list_item",
            NodeType::Image => "image",
            NodeType::Link => "link",
            NodeType::CodeBlock => "code_block",
            NodeType::Text => "text",
            NodeType::LinkNode => "link_node",
            NodeType::Other(name) => name,
        }
    }

    /// Check if this type belongs to the public vocabulary.
    pub fn is_public(&self) -> bool {
        !matches!(self, NodeType::LinkNode | NodeType::Other(_))
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        match NodeType::from_name(&name) {
            NodeType::Other(_) => NodeType::Other(name),
            known => known,
        }
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a `fontId` attribute.
///
/// `Null` is the legacy sentinel and is distinct from `Absent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontIdAttr<'a> {
    /// No attrs, or no `fontId` key
    Absent,
    /// `fontId: null`
    Null,
    /// `fontId: "<id>"`
    Set(&'a str),
    /// Any other JSON value; left untouched by normalization
    Unexpected(&'a Value),
}

impl<'a> FontIdAttr<'a> {
    /// Read the `fontId` state out of an optional attribute map.
    pub fn of(attrs: Option<&'a Attrs>) -> Self {
        match attrs.and_then(|a| a.get(FONT_ID_ATTR)) {
            None => FontIdAttr::Absent,
            Some(Value::Null) => FontIdAttr::Null,
            Some(Value::String(id)) => FontIdAttr::Set(id),
            Some(other) => FontIdAttr::Unexpected(other),
        }
    }

    /// The font id if one is set.
    pub fn as_id(&self) -> Option<&'a str> {
        match self {
            FontIdAttr::Set(id) => Some(id),
            _ => None,
        }
    }
}

/// A node of the document tree.
///
/// Text nodes carry `text` and optionally `marks`; every other node may
/// carry `content`. Absent and empty `content` are both valid and are kept
/// distinct through conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocNode {
    /// Node type tag
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Type-specific attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,

    /// Marks applied to a text node, innermost first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<DocNode>>,

    /// Text of a text leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DocNode {
    /// Create a bare node of the given type.
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            attrs: None,
            marks: None,
            content: None,
            text: None,
        }
    }

    /// Create a document root.
    pub fn doc(children: Vec<DocNode>) -> Self {
        Self::new(NodeType::Doc).with_content(children)
    }

    /// Create a paragraph.
    pub fn paragraph(children: Vec<DocNode>) -> Self {
        Self::new(NodeType::Paragraph).with_content(children)
    }

    /// Create a heading. The level is stored as given.
    pub fn heading(level: i64, children: Vec<DocNode>) -> Self {
        Self::new(NodeType::Heading)
            .with_attr("level", level)
            .with_content(children)
    }

    /// Create a bullet list.
    pub fn bullet_list(items: Vec<DocNode>) -> Self {
        Self::new(NodeType::BulletList).with_content(items)
    }

    /// Create an ordered list.
    pub fn ordered_list(items: Vec<DocNode>) -> Self {
        Self::new(NodeType::OrderedList).with_content(items)
    }

    /// Create a list item.
    pub fn list_item(children: Vec<DocNode>) -> Self {
        Self::new(NodeType::ListItem).with_content(children)
    }

    /// Create an image.
    pub fn image(src: impl Into<String>) -> Self {
        Self::new(NodeType::Image).with_attr("src", src.into())
    }

    /// Create a block-level link.
    pub fn link(href: impl Into<String>, children: Vec<DocNode>) -> Self {
        Self::new(NodeType::Link)
            .with_attr("href", href.into())
            .with_content(children)
    }

    /// Create a code block holding a single text node.
    pub fn code_block(code: impl Into<String>) -> Self {
        Self::new(NodeType::CodeBlock).with_content(vec![Self::text(code)])
    }

    /// Create a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Text);
        node.text = Some(text.into());
        node
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the `fontId` attribute.
    pub fn with_font(self, font_id: impl Into<String>) -> Self {
        self.with_attr(FONT_ID_ATTR, font_id.into())
    }

    /// Set the children.
    pub fn with_content(mut self, children: Vec<DocNode>) -> Self {
        self.content = Some(children);
        self
    }

    /// Append a mark.
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.get_or_insert_with(Vec::new).push(mark);
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.as_ref().and_then(|a| a.get(key))
    }

    /// Get a string attribute.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Value::as_str)
    }

    /// Get the heading level if it is an integer.
    pub fn level(&self) -> Option<i64> {
        self.attr("level").and_then(Value::as_i64)
    }

    /// Get the state of the `fontId` attribute.
    pub fn font_id(&self) -> FontIdAttr<'_> {
        FontIdAttr::of(self.attrs.as_ref())
    }

    /// Get the children, empty when `content` is absent.
    pub fn children(&self) -> &[DocNode] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// Get the marks, empty when `marks` is absent.
    pub fn mark_list(&self) -> &[Mark] {
        self.marks.as_deref().unwrap_or(&[])
    }

    /// Check if this is a text leaf.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(ref text) = self.text {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(DocNode::node_count).sum::<usize>()
    }
}
