//! # richdoc
//!
//! Rich-text document model and transforms for Rust.
//!
//! This library holds a JSON-shaped rich-text tree (paragraphs, headings,
//! lists, links, images, code blocks and inline marks) and moves it across
//! three forms: the persisted JSON document, the state of a stateful
//! editing engine, and HTML.
//!
//! ## Quick Start
//!
//! ```
//! use richdoc::{parse_str, render, FontConfig};
//!
//! fn main() -> richdoc::Result<()> {
//!     let doc = parse_str(r#"{"type":"doc","content":[
//!         {"type":"paragraph","attrs":{"fontId":"lora"},
//!          "content":[{"type":"text","text":"Hi","marks":[{"type":"bold"}]}]}
//!     ]}"#)?;
//!
//!     let options = render::HtmlOptions::new().with_fonts(FontConfig::builtin());
//!     let html = render::to_html(&doc, &options);
//!     assert_eq!(html, r#"<p class="font-lora"><strong>Hi</strong></p>"#);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Document model**: serde-backed tree that keeps unknown node types verbatim
//! - **Font configuration**: allow-lists and defaults with total normalization
//! - **Engine conversion**: `link` ⇄ `link_node` renaming and font cleanup
//!   around any [`EditorEngine`]
//! - **HTML rendering**: escaped, visitor-customizable, fragment or full page

pub mod convert;
pub mod engine;
pub mod error;
pub mod fonts;
pub mod model;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use convert::{from_engine_state, to_engine_state, Converter};
pub use engine::{EditorEngine, EngineSchema, EngineState, SchemaEngine};
pub use error::{Error, Result};
pub use fonts::{get_available_fonts, normalize_font_id, FontCategory, FontConfig, FontMeta};
pub use model::{
    is_known_mark_type, is_known_node_type, validate, Attrs, DocNode, FontIdAttr, Mark, MarkType,
    NodeType, ValidationIssue,
};
pub use render::{doc_node_to_html, DocumentStats, HtmlOptions, JsonFormat};
pub use transform::{map_from_engine, map_to_engine, normalize_fonts, strip_null_font_ids};

use std::io::Read;
use std::path::Path;

/// Parse a document from a JSON string.
///
/// # Example
///
/// ```
/// use richdoc::parse_str;
///
/// let doc = parse_str(r#"{"type":"doc","content":[]}"#).unwrap();
/// assert!(doc.children().is_empty());
/// ```
pub fn parse_str(json: &str) -> Result<DocNode> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<DocNode> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a document from a reader.
///
/// # Arguments
///
/// * `reader` - Any type implementing `Read`
pub fn parse_reader<R: Read>(reader: R) -> Result<DocNode> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use richdoc::parse_file;
///
/// let doc = parse_file("note.json").unwrap();
/// println!("Nodes: {}", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DocNode> {
    let data = std::fs::read(path.as_ref())?;
    log::debug!("read {} bytes from {}", data.len(), path.as_ref().display());
    parse_bytes(&data)
}

/// Builder for loading and converting documents.
///
/// # Example
///
/// ```
/// use richdoc::{FontConfig, Richdoc};
///
/// let result = Richdoc::new()
///     .with_fonts(FontConfig::builtin())
///     .parse_str(r#"{"type":"doc","content":[{"type":"paragraph","attrs":{"fontId":"ghost"}}]}"#)?;
///
/// assert_eq!(result.to_html(), "<p></p>");
/// let normalized = result.normalized();
/// assert_eq!(normalized.children()[0].font_id().as_id(), Some("inter"));
/// # Ok::<(), richdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Richdoc {
    html_options: HtmlOptions,
}

impl Richdoc {
    /// Create a new Richdoc builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize fonts and resolve font classes against a configuration.
    pub fn with_fonts(mut self, fonts: FontConfig) -> Self {
        self.html_options = self.html_options.with_fonts(fonts);
        self
    }

    /// Render HTML as a complete document.
    pub fn with_standalone_html(mut self) -> Self {
        self.html_options = self.html_options.with_standalone(true);
        self
    }

    /// Clamp heading levels into 1..=6 in HTML.
    pub fn with_clamped_headings(mut self) -> Self {
        self.html_options = self.html_options.with_clamped_headings(true);
        self
    }

    /// Set HTML options wholesale.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html_options = options;
        self
    }

    /// Wrap an already loaded document.
    pub fn load(self, document: DocNode) -> RichdocResult {
        RichdocResult {
            document,
            html_options: self.html_options,
        }
    }

    /// Parse a document from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<RichdocResult> {
        Ok(self.load(parse_str(json)?))
    }

    /// Parse a document from JSON bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<RichdocResult> {
        Ok(self.load(parse_bytes(data)?))
    }

    /// Parse a document from a JSON file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<RichdocResult> {
        Ok(self.load(parse_file(path)?))
    }
}

/// A loaded document plus the options it was loaded with.
#[derive(Debug, Clone)]
pub struct RichdocResult {
    /// The parsed document
    pub document: DocNode,
    html_options: HtmlOptions,
}

impl RichdocResult {
    /// Get the document.
    pub fn document(&self) -> &DocNode {
        &self.document
    }

    /// The font configuration, if any.
    pub fn fonts(&self) -> Option<&FontConfig> {
        self.html_options.fonts.as_ref()
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.html_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// The document with fonts clamped onto the configuration, or only
    /// cleared of `fontId: null` when there is none.
    pub fn normalized(&self) -> DocNode {
        match self.fonts() {
            Some(fonts) => normalize_fonts(&self.document, fonts),
            None => strip_null_font_ids(&self.document),
        }
    }

    /// Send the document through the built-in engine and back.
    pub fn round_trip(&self) -> Result<DocNode> {
        let state = to_engine_state(&self.document, self.fonts())?;
        from_engine_state(&state)
    }

    /// Structural problems in the document.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(&self.document)
    }

    /// Node and text statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Hi"}]},
            {"type": "paragraph", "attrs": {"fontId": null}, "content": [
                {"type": "text", "text": "go "},
                {"type": "text", "text": "here", "marks": [{"type": "link", "attrs": {"href": "https://x.test"}}]}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_str() {
        let doc = parse_str(SAMPLE).unwrap();
        assert_eq!(doc.node_type, NodeType::Doc);
        assert_eq!(doc.children().len(), 2);
    }

    #[test]
    fn test_parse_str_invalid_json() {
        assert!(matches!(parse_str("{not json"), Err(Error::Json(_))));
        assert!(matches!(parse_str(r#"{"content": []}"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_bytes_and_reader() {
        let from_bytes = parse_bytes(SAMPLE.as_bytes()).unwrap();
        let from_reader = parse_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(from_bytes, from_reader);
    }

    #[test]
    fn test_parse_file_missing() {
        assert!(matches!(
            parse_file("/nonexistent/richdoc/note.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_builder_default() {
        let builder = Richdoc::default();
        assert!(builder.html_options.fonts.is_none());
        assert!(!builder.html_options.standalone);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Richdoc::new()
            .with_fonts(FontConfig::builtin())
            .with_standalone_html()
            .with_clamped_headings();
        assert!(builder.html_options.fonts.is_some());
        assert!(builder.html_options.standalone);
        assert!(builder.html_options.clamp_headings);
    }

    #[test]
    fn test_result_outputs() {
        let result = Richdoc::new().parse_str(SAMPLE).unwrap();
        assert_eq!(
            result.to_html(),
            "<h1>Hi</h1><p>go <a href=\"https://x.test\">here</a></p>"
        );
        assert_eq!(result.to_text(), "Hi\n\ngo here");
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"fontId\":null"));
        assert!(result.validate().is_empty());
        assert_eq!(result.stats().text_count, 3);
    }

    #[test]
    fn test_result_normalized_strips_null() {
        let result = Richdoc::new().parse_str(SAMPLE).unwrap();
        assert_eq!(result.normalized().children()[1].attrs, None);
    }

    #[test]
    fn test_result_round_trip() {
        let result = Richdoc::new().parse_str(SAMPLE).unwrap();
        let back = result.round_trip().unwrap();
        assert_eq!(back, result.normalized());
    }
}
