//! Integration tests for the visitor pattern.

use richdoc::model::{DocNode, Mark, NodeType};
use richdoc::render::visitor::{
    CompositeVisitor, DefaultVisitor, NodeVisitor, SkipImagesVisitor, VisitorAction,
};
use richdoc::render::{HtmlOptions, HtmlRenderer};

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    node_count: usize,
    heading_count: usize,
    image_count: usize,
    text_count: usize,
}

impl NodeVisitor for CountingVisitor {
    fn visit_node(&mut self, _node: &DocNode) -> VisitorAction {
        self.node_count += 1;
        VisitorAction::Continue
    }

    fn visit_heading(&mut self, _text: &str, _level: i64) -> VisitorAction {
        self.heading_count += 1;
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _src: Option<&str>, _alt: Option<&str>) -> VisitorAction {
        self.image_count += 1;
        VisitorAction::Continue
    }

    fn visit_text(&mut self, _node: &DocNode) -> VisitorAction {
        self.text_count += 1;
        VisitorAction::Continue
    }
}

/// Visitor that renders images as figures.
struct FigureVisitor;

impl NodeVisitor for FigureVisitor {
    fn visit_image(&mut self, src: Option<&str>, alt: Option<&str>) -> VisitorAction {
        VisitorAction::Replace(format!(
            "<figure><img src=\"{}\" /><figcaption>{}</figcaption></figure>",
            src.unwrap_or_default(),
            alt.unwrap_or_default()
        ))
    }
}

/// Visitor that drops every code block.
struct NoCodeVisitor;

impl NodeVisitor for NoCodeVisitor {
    fn visit_node(&mut self, node: &DocNode) -> VisitorAction {
        if node.node_type == NodeType::CodeBlock {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

fn sample() -> DocNode {
    DocNode::doc(vec![
        DocNode::heading(1, vec![DocNode::text("Title")]),
        DocNode::paragraph(vec![
            DocNode::text("a"),
            DocNode::text("b").with_mark(Mark::italic()),
        ]),
        DocNode::image("a.png").with_attr("alt", "A"),
        DocNode::code_block("x"),
    ])
}

#[test]
fn test_default_visitor_renders_everything() {
    let plain = HtmlRenderer::new(HtmlOptions::default()).render(&sample());
    let visited = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(DefaultVisitor::new())
        .render(&sample());
    assert_eq!(plain, visited);
}

#[test]
fn test_counting_visitor_sees_every_node() {
    let doc = sample();
    let mut counter = CountingVisitor::default();
    // Drive the hooks by hand to check counts without a renderer.
    fn walk(v: &mut CountingVisitor, node: &DocNode) {
        v.visit_node(node);
        match node.node_type {
            NodeType::Heading => {
                v.visit_heading(&node.plain_text(), node.level().unwrap_or(1));
            }
            NodeType::Image => {
                v.visit_image(node.attr_str("src"), node.attr_str("alt"));
            }
            NodeType::Text => {
                v.visit_text(node);
            }
            _ => {}
        }
        for child in node.children() {
            walk(v, child);
        }
    }
    walk(&mut counter, &doc);

    assert_eq!(counter.node_count, doc.node_count());
    assert_eq!(counter.heading_count, 1);
    assert_eq!(counter.image_count, 1);
    assert_eq!(counter.text_count, 4);
}

#[test]
fn test_skip_images() {
    let html = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(SkipImagesVisitor)
        .render(&sample());
    assert!(!html.contains("<img"));
    assert!(html.contains("<h1>Title</h1>"));
}

#[test]
fn test_replace_image() {
    let html = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(FigureVisitor)
        .render(&sample());
    assert!(html.contains("<figure><img src=\"a.png\" /><figcaption>A</figcaption></figure>"));
}

#[test]
fn test_skip_node_drops_subtree() {
    let html = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(NoCodeVisitor)
        .render(&sample());
    assert!(!html.contains("<pre>"));
}

#[test]
fn test_composite_order() {
    let composite = CompositeVisitor::new()
        .with_visitor(SkipImagesVisitor)
        .with_visitor(FigureVisitor)
        .with_visitor(NoCodeVisitor);

    let html = HtmlRenderer::new(HtmlOptions::default())
        .with_visitor(composite)
        .render(&sample());
    assert_eq!(html, "<h1>Title</h1><p>a<em>b</em></p>");
}
