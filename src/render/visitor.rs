//! Visitor pattern for customizing HTML rendering.
//!
//! Visitors are consulted before a node is rendered and may keep the
//! default output, replace it, or drop the node.
//!
//! # Example
//!
//! ```
//! use richdoc::model::DocNode;
//! use richdoc::render::{HtmlOptions, HtmlRenderer, NodeVisitor, VisitorAction};
//!
//! struct Callouts;
//!
//! impl NodeVisitor for Callouts {
//!     fn visit_unknown(&mut self, node: &DocNode) -> VisitorAction {
//!         if node.node_type.as_str() == "callout" {
//!             VisitorAction::Replace(format!("<aside>{}</aside>", node.plain_text()))
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//!
//! let doc: DocNode = serde_json::from_str(
//!     r#"{"type":"doc","content":[{"type":"callout","content":[{"type":"text","text":"Hey"}]}]}"#,
//! )?;
//! let html = HtmlRenderer::new(HtmlOptions::default())
//!     .with_visitor(Callouts)
//!     .render(&doc);
//! assert_eq!(html, "<aside>Hey</aside>");
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::model::DocNode;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node with raw HTML. The replacement is not escaped.
    Replace(String),

    /// Skip this node entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Hooks called by [`HtmlRenderer`](super::HtmlRenderer) before each node.
///
/// `visit_node` runs first for every node; the kind-specific hook runs only
/// when it returned `Continue`. All methods return `Continue` by default.
pub trait NodeVisitor: Send + Sync {
    /// Called before rendering any node.
    fn visit_node(&mut self, node: &DocNode) -> VisitorAction {
        let _ = node;
        VisitorAction::Continue
    }

    /// Called before rendering a heading.
    ///
    /// # Arguments
    /// * `text` - The heading's plain text
    /// * `level` - The level about to be emitted
    fn visit_heading(&mut self, text: &str, level: i64) -> VisitorAction {
        let _ = (text, level);
        VisitorAction::Continue
    }

    /// Called before rendering an image.
    fn visit_image(&mut self, src: Option<&str>, alt: Option<&str>) -> VisitorAction {
        let _ = (src, alt);
        VisitorAction::Continue
    }

    /// Called before rendering a text leaf.
    fn visit_text(&mut self, node: &DocNode) -> VisitorAction {
        let _ = node;
        VisitorAction::Continue
    }

    /// Called for node types the renderer does not know, which otherwise
    /// render as nothing.
    fn visit_unknown(&mut self, node: &DocNode) -> VisitorAction {
        let _ = node;
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl NodeVisitor for DefaultVisitor {}

/// Visitor that skips all images.
#[derive(Debug, Clone, Default)]
pub struct SkipImagesVisitor;

impl NodeVisitor for SkipImagesVisitor {
    fn visit_image(&mut self, _src: Option<&str>, _alt: Option<&str>) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn first_action<F>(&mut self, mut visit: F) -> VisitorAction
    where
        F: FnMut(&mut dyn NodeVisitor) -> VisitorAction,
    {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl NodeVisitor for CompositeVisitor {
    fn visit_node(&mut self, node: &DocNode) -> VisitorAction {
        self.first_action(|v| v.visit_node(node))
    }

    fn visit_heading(&mut self, text: &str, level: i64) -> VisitorAction {
        self.first_action(|v| v.visit_heading(text, level))
    }

    fn visit_image(&mut self, src: Option<&str>, alt: Option<&str>) -> VisitorAction {
        self.first_action(|v| v.visit_image(src, alt))
    }

    fn visit_text(&mut self, node: &DocNode) -> VisitorAction {
        self.first_action(|v| v.visit_text(node))
    }

    fn visit_unknown(&mut self, node: &DocNode) -> VisitorAction {
        self.first_action(|v| v.visit_unknown(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShoutingHeadings;

    impl NodeVisitor for ShoutingHeadings {
        fn visit_heading(&mut self, text: &str, level: i64) -> VisitorAction {
            VisitorAction::Replace(format!("<h{0}>{1}</h{0}>", level, text.to_uppercase()))
        }
    }

    #[test]
    fn test_visitor_action_default() {
        assert_eq!(VisitorAction::default(), VisitorAction::Continue);
    }

    #[test]
    fn test_visitor_action_helpers() {
        assert!(VisitorAction::Skip.should_skip());
        assert!(!VisitorAction::Continue.should_skip());
        assert!(VisitorAction::Replace("x".into()).is_replace());
        assert_eq!(VisitorAction::Replace("x".into()).replacement(), Some("x"));
        assert!(VisitorAction::Skip.replacement().is_none());
    }

    #[test]
    fn test_default_visitor() {
        let mut visitor = DefaultVisitor::new();
        let node = DocNode::paragraph(vec![]);
        assert_eq!(visitor.visit_node(&node), VisitorAction::Continue);
        assert_eq!(visitor.visit_image(Some("a.png"), None), VisitorAction::Continue);
    }

    #[test]
    fn test_skip_images_visitor() {
        let mut visitor = SkipImagesVisitor;
        assert!(visitor.visit_image(Some("a.png"), Some("alt")).should_skip());
        assert!(!visitor.visit_heading("Title", 1).should_skip());
    }

    #[test]
    fn test_composite_first_non_continue_wins() {
        let mut composite = CompositeVisitor::new()
            .with_visitor(DefaultVisitor)
            .with_visitor(SkipImagesVisitor)
            .with_visitor(ShoutingHeadings);
        assert_eq!(composite.len(), 3);

        assert!(composite.visit_image(None, None).should_skip());
        assert_eq!(
            composite.visit_heading("hi", 2).replacement(),
            Some("<h2>HI</h2>")
        );
        let node = DocNode::text("x");
        assert_eq!(composite.visit_text(&node), VisitorAction::Continue);
    }

    #[test]
    fn test_empty_composite() {
        let mut composite = CompositeVisitor::new();
        assert!(composite.is_empty());
        assert_eq!(composite.visit_unknown(&DocNode::doc(vec![])), VisitorAction::Continue);
    }
}
