//! Document model types for rich-text content.
//!
//! This module defines the JSON-shaped tree shared by every other part of
//! the crate: the persisted document format, the input of the converters
//! and the input of the renderers. Trees are plain values; every transform
//! builds a new tree rather than mutating its input.

mod mark;
mod node;
pub mod validate;

pub use mark::{Mark, MarkType};
pub use node::{Attrs, DocNode, FontIdAttr, NodeType, FONT_ID_ATTR};
pub use validate::{
    is_known_node_type, is_known_mark_type, validate, validate_strict, IssueKind, ValidationIssue,
};
