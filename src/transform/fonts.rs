//! Font attribute normalization.

use super::{rebuild, FontRule};
use crate::fonts::FontConfig;
use crate::model::{DocNode, NodeType};

fn same_type(node_type: &NodeType) -> NodeType {
    node_type.clone()
}

/// Clamp every `fontId` in the tree onto `config`.
///
/// String ids go through [`normalize_font_id`](crate::fonts::normalize_font_id);
/// legacy `fontId: null` entries are removed, and attribute maps left empty
/// by the removal become `None`.
pub fn normalize_fonts(node: &DocNode, config: &FontConfig) -> DocNode {
    rebuild(node, &same_type, FontRule::Normalize(config))
}

/// Remove legacy `fontId: null` entries without touching string ids.
pub fn strip_null_font_ids(node: &DocNode) -> DocNode {
    rebuild(node, &same_type, FontRule::StripNull)
}
