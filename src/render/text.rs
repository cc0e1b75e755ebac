//! Plain text rendering for documents.

use crate::model::{DocNode, NodeType};

/// Convert a document to plain text.
///
/// Blocks are separated by a blank line, list items get a `-` or `n.`
/// marker, and images contribute their alt text. Marks are dropped.
pub fn to_text(doc: &DocNode) -> String {
    let mut blocks = Vec::new();
    collect_blocks(doc, &mut blocks);
    blocks.join("\n\n")
}

fn collect_blocks(node: &DocNode, blocks: &mut Vec<String>) {
    match node.node_type {
        NodeType::Paragraph | NodeType::Heading | NodeType::CodeBlock | NodeType::Text => {
            let text = node.plain_text();
            if !text.trim().is_empty() {
                blocks.push(text);
            }
        }
        NodeType::BulletList | NodeType::OrderedList => {
            let list = render_list(node);
            if !list.is_empty() {
                blocks.push(list);
            }
        }
        NodeType::Image => {
            if let Some(alt) = node.attr_str("alt").filter(|a| !a.is_empty()) {
                blocks.push(alt.to_string());
            }
        }
        _ => {
            for child in node.children() {
                collect_blocks(child, blocks);
            }
        }
    }
}

fn render_list(list: &DocNode) -> String {
    let ordered = list.node_type == NodeType::OrderedList;
    let start = list.attr("start").and_then(|v| v.as_i64()).unwrap_or(1);

    let mut lines = Vec::new();
    for (i, item) in list.children().iter().enumerate() {
        let marker = if ordered {
            format!("{}.", start.saturating_add(i as i64))
        } else {
            "-".to_string()
        };

        let mut blocks = Vec::new();
        for child in item.children() {
            collect_blocks(child, &mut blocks);
        }
        let body = blocks.join("\n").replace('\n', "\n  ");
        if body.is_empty() {
            lines.push(marker);
        } else {
            lines.push(format!("{} {}", marker, body));
        }
    }
    lines.join("\n")
}
