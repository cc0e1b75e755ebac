//! Integration tests for HTML rendering.

use richdoc::render::{to_html, HtmlOptions};
use richdoc::{doc_node_to_html, parse_str, DocNode, FontConfig, FontMeta};

fn fonts(allowed: &[&str]) -> FontConfig {
    let config = FontConfig::new(
        vec![
            FontMeta::new("inter", "Inter"),
            FontMeta::new("roboto", "Roboto"),
            FontMeta::new("lora", "Lora"),
        ],
        "inter",
    );
    if allowed.is_empty() {
        config
    } else {
        config.with_allowed(allowed.iter().copied())
    }
}

#[test]
fn test_heading_document() {
    let doc = parse_str(
        r#"{"type":"doc","content":[{"type":"heading","attrs":{"level":1},"content":[{"type":"text","text":"Hi"}]}]}"#,
    )
    .unwrap();
    assert_eq!(doc_node_to_html(&doc, None), "<h1>Hi</h1>");
}

#[test]
fn test_allowed_font_gets_class() {
    let doc = parse_str(
        r#"{"type":"paragraph","attrs":{"fontId":"roboto"},"content":[{"type":"text","text":"x"}]}"#,
    )
    .unwrap();

    let allowed = fonts(&["inter", "roboto"]);
    assert_eq!(
        doc_node_to_html(&doc, Some(&allowed)),
        r#"<p class="font-roboto">x</p>"#
    );

    let disallowed = fonts(&["inter", "lora"]);
    assert_eq!(doc_node_to_html(&doc, Some(&disallowed)), "<p>x</p>");
}

#[test]
fn test_text_is_escaped() {
    let doc = DocNode::doc(vec![DocNode::paragraph(vec![DocNode::text("<b>hi</b>")])]);
    assert_eq!(doc_node_to_html(&doc, None), "<p>&lt;b&gt;hi&lt;/b&gt;</p>");
}

#[test]
fn test_link_block_wraps_children() {
    let doc = DocNode::link(
        "https://x.test",
        vec![DocNode::paragraph(vec![DocNode::text("card")])],
    )
    .with_attr("target", "_blank");
    assert_eq!(
        doc_node_to_html(&doc, None),
        r#"<a href="https://x.test" target="_blank"><p>card</p></a>"#
    );
}

#[test]
fn test_attribute_values_escaped() {
    let doc = DocNode::link("https://x.test/?a=1&b=\"2\"", vec![]).with_attr("title", "it's");
    assert_eq!(
        doc_node_to_html(&doc, None),
        r#"<a href="https://x.test/?a=1&amp;b=&quot;2&quot;" title="it&apos;s"></a>"#
    );
}

#[test]
fn test_unknown_nodes_vanish_but_survive_json() {
    let json = r#"{"type":"doc","content":[{"type":"callout","attrs":{"tone":"warn"}},{"type":"paragraph"}]}"#;
    let doc = parse_str(json).unwrap();

    assert_eq!(doc_node_to_html(&doc, None), "<p></p>");
    let back: serde_json::Value = serde_json::to_value(&doc).unwrap();
    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_full_document() {
    let doc = parse_str(
        r#"{
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 2, "fontId": "lora"}, "content": [{"type": "text", "text": "Notes"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "Read "},
                {"type": "text", "text": "this", "marks": [{"type": "bold"}, {"type": "link", "attrs": {"href": "/a"}}]}
            ]},
            {"type": "ordered_list", "content": [
                {"type": "list_item", "attrs": {"fontId": "roboto"}, "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "one"}]}
                ]}
            ]},
            {"type": "code_block", "content": [{"type": "text", "text": "a && b"}]},
            {"type": "image", "attrs": {"src": "x.png", "title": "X"}}
        ]
    }"#,
    )
    .unwrap();

    let html = to_html(&doc, &HtmlOptions::new().with_fonts(fonts(&[])));
    assert_eq!(
        html,
        concat!(
            r#"<h2 class="font-lora">Notes</h2>"#,
            r#"<p>Read <a href="/a"><strong>this</strong></a></p>"#,
            r#"<ol><li class="font-roboto"><p>one</p></li></ol>"#,
            "<pre><code>a &amp;&amp; b</code></pre>",
            r#"<img src="x.png" title="X" />"#,
        )
    );
}

#[test]
fn test_rendering_leaves_input_untouched() {
    let doc = DocNode::paragraph(vec![DocNode::text("x")]).with_font("ghost");
    let before = doc.clone();
    let _ = doc_node_to_html(&doc, Some(&fonts(&[])));
    assert_eq!(doc, before);
}
