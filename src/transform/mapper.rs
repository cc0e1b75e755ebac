//! Node-type renaming across the engine boundary.
//!
//! The engine reserves `link`, so public `link` nodes travel as `link_node`.

use super::{rebuild, FontRule};
use crate::model::{DocNode, NodeType};

/// Public name → engine name.
pub fn to_engine_type(node_type: &NodeType) -> NodeType {
    match node_type {
        NodeType::Link => NodeType::LinkNode,
        other => other.clone(),
    }
}

/// Engine name → public name.
pub fn from_engine_type(node_type: &NodeType) -> NodeType {
    match node_type {
        NodeType::LinkNode => NodeType::Link,
        other => other.clone(),
    }
}

/// Rename every node type in the tree, depth-first, left to right.
///
/// Each visited node is rebuilt as a copy; the input is untouched.
pub fn map_node_types<F>(node: &DocNode, map: &F) -> DocNode
where
    F: Fn(&NodeType) -> NodeType,
{
    rebuild(node, map, FontRule::Keep)
}

/// Rename a public tree into the engine vocabulary.
pub fn map_to_engine(node: &DocNode) -> DocNode {
    map_node_types(node, &to_engine_type)
}

/// Rename an engine tree back into the public vocabulary.
pub fn map_from_engine(node: &DocNode) -> DocNode {
    map_node_types(node, &from_engine_type)
}
