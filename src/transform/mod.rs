//! Pure tree rewrites applied at the editor-engine boundary.
//!
//! Every function here copies the tree it is given. The two public
//! rewrites are the node-type mapper (public names ⇄ engine names) and the
//! font normalizer; the converters fuse both into one traversal.

mod fonts;
mod mapper;

pub use fonts::{normalize_fonts, strip_null_font_ids};
pub use mapper::{
    from_engine_type, map_from_engine, map_node_types, map_to_engine, to_engine_type,
};

use crate::fonts::{normalize_font_id, FontConfig};
use crate::model::{Attrs, DocNode, FontIdAttr, Mark, NodeType, FONT_ID_ATTR};
use serde_json::Value;

/// What to do with `fontId` attributes during a rebuild.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FontRule<'a> {
    /// Leave them alone
    Keep,
    /// Drop `fontId: null`
    StripNull,
    /// Drop `fontId: null` and clamp string ids onto the configuration
    Normalize(&'a FontConfig),
}

/// Rebuild a tree depth-first, renaming every node type with `map_type`
/// and applying `fonts` to node and mark attributes.
pub(crate) fn rebuild<F>(node: &DocNode, map_type: &F, fonts: FontRule<'_>) -> DocNode
where
    F: Fn(&NodeType) -> NodeType,
{
    DocNode {
        node_type: map_type(&node.node_type),
        attrs: rewrite_attrs(node.attrs.as_ref(), fonts),
        marks: node.marks.as_ref().map(|marks| {
            marks
                .iter()
                .map(|m| Mark {
                    mark_type: m.mark_type.clone(),
                    attrs: rewrite_attrs(m.attrs.as_ref(), fonts),
                })
                .collect()
        }),
        content: node.content.as_ref().map(|children| {
            children
                .iter()
                .map(|child| rebuild(child, map_type, fonts))
                .collect()
        }),
        text: node.text.clone(),
    }
}

/// Apply a font rule to one attribute map.
///
/// A map emptied by stripping collapses to `None`; a map that was already
/// empty is kept.
fn rewrite_attrs(attrs: Option<&Attrs>, fonts: FontRule<'_>) -> Option<Attrs> {
    let attrs = attrs?;
    match (FontIdAttr::of(Some(attrs)), fonts) {
        (FontIdAttr::Null, FontRule::StripNull | FontRule::Normalize(_)) => {
            let mut stripped = attrs.clone();
            stripped.remove(FONT_ID_ATTR);
            if stripped.is_empty() {
                None
            } else {
                Some(stripped)
            }
        }
        (FontIdAttr::Set(id), FontRule::Normalize(config)) => {
            let normalized = normalize_font_id(Some(id), config);
            let mut clamped = attrs.clone();
            clamped.insert(FONT_ID_ATTR.to_string(), Value::String(normalized.to_string()));
            Some(clamped)
        }
        _ => Some(attrs.clone()),
    }
}
