//! Rendering module for converting documents to output formats.

pub mod escape;
mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use escape::escape_html;
pub use html::{doc_node_to_html, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::HtmlOptions;
pub use result::{DocumentStats, RenderResult};
pub use text::to_text;
pub use visitor::{CompositeVisitor, DefaultVisitor, NodeVisitor, SkipImagesVisitor, VisitorAction};
