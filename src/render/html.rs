//! HTML rendering for rich-text documents.
//!
//! Rendering is a pure depth-first walk: every known node type maps onto a
//! fixed tag, text is escaped, and unknown node types render as nothing.
//! Rendering never fails.

use crate::fonts::{font_stylesheet, normalize_font_id, FontConfig};
use crate::model::{Attrs, DocNode, FontIdAttr, MarkType, NodeType};
use serde_json::Value;

use super::escape::escape_html;
use super::{DocumentStats, HtmlOptions, NodeVisitor, RenderResult, VisitorAction};

/// Convert a document to an HTML string.
pub fn to_html(doc: &DocNode, options: &HtmlOptions) -> String {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// Convert a document to an HTML fragment, resolving font classes against
/// `fonts` when given.
pub fn doc_node_to_html(doc: &DocNode, fonts: Option<&FontConfig>) -> String {
    let options = HtmlOptions::new().with_optional_fonts(fonts.cloned());
    to_html(doc, &options)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &DocNode, options: &HtmlOptions) -> RenderResult {
    let content = to_html(doc, options);
    RenderResult::new(content, DocumentStats::collect(doc))
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: HtmlOptions,
    visitor: Option<Box<dyn NodeVisitor>>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            visitor: None,
        }
    }

    /// Consult `visitor` before each node.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// The options in use.
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Render a document to HTML.
    pub fn render(&mut self, doc: &DocNode) -> String {
        let mut body = String::new();
        self.render_node(&mut body, doc);
        if self.options.standalone {
            self.wrap_document(&body)
        } else {
            body
        }
    }

    fn wrap_document(&self, body: &str) -> String {
        let mut output = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if let Some(ref title) = self.options.title {
            output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        if let Some(ref fonts) = self.options.fonts {
            output.push_str("<style>\n");
            output.push_str(&font_stylesheet(fonts));
            output.push_str("</style>\n");
        }
        output.push_str("</head>\n<body>\n");
        output.push_str(body);
        output.push_str("\n</body>\n</html>\n");
        output
    }

    fn consult<F>(&mut self, visit: F) -> VisitorAction
    where
        F: FnOnce(&mut dyn NodeVisitor) -> VisitorAction,
    {
        match self.visitor {
            Some(ref mut visitor) => visit(visitor.as_mut()),
            None => VisitorAction::Continue,
        }
    }

    /// Apply a visitor action; returns true when default rendering should
    /// proceed.
    fn proceed(output: &mut String, action: VisitorAction) -> bool {
        match action {
            VisitorAction::Continue => true,
            VisitorAction::Replace(html) => {
                output.push_str(&html);
                false
            }
            VisitorAction::Skip => false,
        }
    }

    fn render_node(&mut self, output: &mut String, node: &DocNode) {
        let action = self.consult(|v| v.visit_node(node));
        if !Self::proceed(output, action) {
            return;
        }

        match node.node_type {
            NodeType::Doc => self.render_children(output, node),
            NodeType::Paragraph => self.render_wrapped(output, node, "p"),
            NodeType::Heading => self.render_heading(output, node),
            NodeType::BulletList => self.render_list(output, node, "ul"),
            NodeType::OrderedList => self.render_list(output, node, "ol"),
            NodeType::ListItem => self.render_wrapped(output, node, "li"),
            NodeType::CodeBlock => {
                output.push_str("<pre><code>");
                output.push_str(&escape_html(&node.plain_text()));
                output.push_str("</code></pre>");
            }
            NodeType::Text => self.render_text(output, node),
            NodeType::Image => self.render_image(output, node),
            NodeType::Link => {
                output.push_str("<a");
                push_link_attrs(output, node.attrs.as_ref());
                output.push('>');
                self.render_children(output, node);
                output.push_str("</a>");
            }
            NodeType::LinkNode | NodeType::Other(_) => {
                let action = self.consult(|v| v.visit_unknown(node));
                if Self::proceed(output, action) {
                    log::debug!("skipping node of unknown type '{}'", node.node_type);
                }
            }
        }
    }

    fn render_children(&mut self, output: &mut String, node: &DocNode) {
        for child in node.children() {
            self.render_node(output, child);
        }
    }

    fn render_list(&mut self, output: &mut String, node: &DocNode, tag: &str) {
        output.push_str(&format!("<{}>", tag));
        self.render_children(output, node);
        output.push_str(&format!("</{}>", tag));
    }

    fn render_wrapped(&mut self, output: &mut String, node: &DocNode, tag: &str) {
        output.push('<');
        output.push_str(tag);
        self.push_font_class(output, node.font_id());
        output.push('>');
        self.render_children(output, node);
        output.push_str(&format!("</{}>", tag));
    }

    fn render_heading(&mut self, output: &mut String, node: &DocNode) {
        let level = self.options.heading_level(node.attr("level"));
        let action = self.consult(|v| v.visit_heading(&node.plain_text(), level));
        if !Self::proceed(output, action) {
            return;
        }

        output.push_str(&format!("<h{}", level));
        self.push_font_class(output, node.font_id());
        output.push('>');
        self.render_children(output, node);
        output.push_str(&format!("</h{}>", level));
    }

    fn render_image(&mut self, output: &mut String, node: &DocNode) {
        let action = self.consult(|v| v.visit_image(node.attr_str("src"), node.attr_str("alt")));
        if !Self::proceed(output, action) {
            return;
        }

        output.push_str("<img");
        for key in ["src", "alt", "title"] {
            push_attr(output, node.attrs.as_ref(), key);
        }
        output.push_str(" />");
    }

    fn render_text(&mut self, output: &mut String, node: &DocNode) {
        let action = self.consult(|v| v.visit_text(node));
        if !Self::proceed(output, action) {
            return;
        }

        let mut html = escape_html(node.text.as_deref().unwrap_or_default());
        for mark in node.mark_list() {
            html = match mark.mark_type {
                MarkType::Bold => format!("<strong>{}</strong>", html),
                MarkType::Italic => format!("<em>{}</em>", html),
                MarkType::Underline => format!("<u>{}</u>", html),
                MarkType::Code => format!("<code>{}</code>", html),
                MarkType::Link => {
                    let mut open = String::from("<a");
                    push_link_attrs(&mut open, mark.attrs.as_ref());
                    format!("{}>{}</a>", open, html)
                }
                MarkType::Font => match self.font_class(mark.font_id()) {
                    Some(class) => format!("<span class=\"{}\">{}</span>", escape_html(&class), html),
                    None => html,
                },
                MarkType::Other(ref name) => {
                    log::trace!("ignoring unknown mark '{}'", name);
                    html
                }
            };
        }
        output.push_str(&html);
    }

    fn push_font_class(&self, output: &mut String, font: FontIdAttr<'_>) {
        if let Some(class) = self.font_class(font) {
            output.push_str(&format!(" class=\"{}\"", escape_html(&class)));
        }
    }

    /// CSS class for a font id.
    ///
    /// With a configuration the id is normalized and the default font gets
    /// no class; without one the raw id is used as is.
    fn font_class(&self, font: FontIdAttr<'_>) -> Option<String> {
        let raw = font.as_id()?;
        match self.options.fonts {
            Some(ref config) => {
                let id = normalize_font_id(Some(raw), config);
                if id == config.default_font_id {
                    None
                } else {
                    Some(format!("font-{}", id))
                }
            }
            None => Some(format!("font-{}", raw)),
        }
    }
}

fn push_link_attrs(output: &mut String, attrs: Option<&Attrs>) {
    for key in ["href", "target", "title"] {
        push_attr(output, attrs, key);
    }
}

/// Append ` key="value"` when the attribute is present and not null.
fn push_attr(output: &mut String, attrs: Option<&Attrs>, key: &str) {
    let value = match attrs.and_then(|a| a.get(key)) {
        None | Some(Value::Null) => return,
        Some(Value::String(s)) => escape_html(s),
        Some(other) => escape_html(&other.to_string()),
    };
    output.push_str(&format!(" {}=\"{}\"", key, value));
}
