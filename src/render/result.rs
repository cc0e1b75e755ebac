//! Rendering result and document statistics.

use crate::model::{DocNode, NodeType};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Statistics of the source document
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: DocumentStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Node counts and text statistics of a document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Total number of nodes, root included
    pub node_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of bullet and ordered lists
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of block links
    pub link_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of text leaves
    pub text_count: u32,

    /// Number of nodes with a type outside the public vocabulary
    pub unknown_count: u32,

    /// Number of marks on text leaves
    pub mark_count: u32,

    /// Deepest nesting level, root at 1
    pub max_depth: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole tree.
    pub fn collect(doc: &DocNode) -> Self {
        let mut stats = Self::new();
        stats.visit(doc, 1);
        stats
    }

    fn visit(&mut self, node: &DocNode, depth: u32) {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth);
        match node.node_type {
            NodeType::Paragraph => self.paragraph_count += 1,
            NodeType::Heading => self.heading_count += 1,
            NodeType::BulletList | NodeType::OrderedList => self.list_count += 1,
            NodeType::ListItem => self.list_item_count += 1,
            NodeType::Image => self.image_count += 1,
            NodeType::Link => self.link_count += 1,
            NodeType::CodeBlock => self.code_block_count += 1,
            NodeType::Text => {
                self.text_count += 1;
                self.mark_count += node.mark_list().len() as u32;
                if let Some(ref text) = node.text {
                    self.count_text(text);
                }
            }
            NodeType::Doc => {}
            NodeType::LinkNode | NodeType::Other(_) => self.unknown_count += 1,
        }
        for child in node.children() {
            self.visit(child, depth + 1);
        }
    }

    /// Add word and character counts from text.
    ///
    /// Counts are per text leaf, so a word split across two differently
    /// marked leaves counts twice.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.node_count += other.node_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.image_count += other.image_count;
        self.link_count += other.link_count;
        self.code_block_count += other.code_block_count;
        self.text_count += other.text_count;
        self.unknown_count += other.unknown_count;
        self.mark_count += other.mark_count;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
