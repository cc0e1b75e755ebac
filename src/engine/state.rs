//! Schema-checked engine state.

use serde_json::{Map, Value};
use std::sync::Arc;

use super::schema::{AttrDefault, AttrSpec, EngineSchema, NodeSpec};
use super::EditorEngine;
use crate::error::{Error, Result};
use crate::model::Attrs;

/// A mark inside the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineMark {
    /// Mark name
    pub mark_type: String,
    /// Attributes after defaults were applied
    pub attrs: Attrs,
}

/// A node inside the engine.
///
/// Declared attributes are always resolved: defaults are filled in, and a
/// missing required attribute prevents the node from existing at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineNode {
    /// Node type name (engine vocabulary)
    pub node_type: String,
    /// Attributes after defaults were applied
    pub attrs: Attrs,
    /// Marks on an inline node
    pub marks: Option<Vec<EngineMark>>,
    /// Children; absent and empty are kept apart
    pub content: Option<Vec<EngineNode>>,
    /// Text of a text leaf
    pub text: Option<String>,
}

impl EngineNode {
    /// Build a node from its JSON form, checking it against `schema`.
    pub fn from_json(schema: &EngineSchema, json: &Value) -> Result<Self> {
        let mut path = Vec::new();
        build_node(schema, json, &mut path).map(|(node, _)| node)
    }

    /// The JSON form of this node.
    ///
    /// Empty attribute maps are omitted.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), Value::String(self.node_type.clone()));
        if !self.attrs.is_empty() {
            obj.insert("attrs".into(), Value::Object(self.attrs.clone()));
        }
        if let Some(ref marks) = self.marks {
            let marks = marks
                .iter()
                .map(|m| {
                    let mut mark = Map::new();
                    mark.insert("type".into(), Value::String(m.mark_type.clone()));
                    if !m.attrs.is_empty() {
                        mark.insert("attrs".into(), Value::Object(m.attrs.clone()));
                    }
                    Value::Object(mark)
                })
                .collect();
            obj.insert("marks".into(), Value::Array(marks));
        }
        if let Some(ref content) = self.content {
            obj.insert(
                "content".into(),
                Value::Array(content.iter().map(EngineNode::to_json).collect()),
            );
        }
        if let Some(ref text) = self.text {
            obj.insert("text".into(), Value::String(text.clone()));
        }
        Value::Object(obj)
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self
            .content
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(EngineNode::node_count)
            .sum::<usize>()
    }
}

fn build_node<'s>(
    schema: &'s EngineSchema,
    json: &Value,
    path: &mut Vec<usize>,
) -> Result<(EngineNode, &'s NodeSpec)> {
    let obj = json
        .as_object()
        .ok_or_else(|| Error::schema_at(&path[..], "node is not an object"))?;
    let type_name = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::schema_at(&path[..], "node has no type"))?;
    let spec = schema.node(type_name).ok_or_else(|| {
        Error::schema_at(&path[..], format!("unknown node type '{}'", type_name))
    })?;

    let attrs = resolve_attrs(obj.get("attrs"), &spec.attrs, type_name, path)?;

    let text = match (spec.is_text(), obj.get("text")) {
        (true, Some(Value::String(t))) if !t.is_empty() => Some(t.clone()),
        (true, Some(Value::String(_))) => {
            return Err(Error::schema_at(path, "empty text nodes are not allowed"))
        }
        (true, _) => return Err(Error::schema_at(path, "text node has no text")),
        (false, None) => None,
        (false, Some(_)) => {
            return Err(Error::schema_at(
                path,
                format!("'{}' cannot carry text", type_name),
            ))
        }
    };

    let marks = match obj.get("marks") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) if spec.is_inline() => Some(
            items
                .iter()
                .map(|m| build_mark(schema, m, &path[..]))
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(Value::Array(_)) => {
            return Err(Error::schema_at(
                path,
                format!("'{}' cannot carry marks", type_name),
            ))
        }
        Some(_) => return Err(Error::schema_at(path, "marks must be an array")),
    };

    let content = match obj.get("content") {
        None | Some(Value::Null) => None,
        Some(Value::Array(children)) => Some(build_children(schema, spec, children, path)?),
        Some(_) => return Err(Error::schema_at(path, "content must be an array")),
    };

    let node = EngineNode {
        node_type: type_name.to_string(),
        attrs,
        marks,
        content,
        text,
    };
    Ok((node, spec))
}

fn build_children(
    schema: &EngineSchema,
    parent: &NodeSpec,
    children: &[Value],
    path: &mut Vec<usize>,
) -> Result<Vec<EngineNode>> {
    let mut built = Vec::with_capacity(children.len());
    for (i, child) in children.iter().enumerate() {
        path.push(i);
        let (node, child_spec) = build_node(schema, child, path)?;
        if !parent.accepts(child_spec) {
            return Err(Error::schema_at(
                path,
                format!("'{}' is not allowed inside '{}'", node.node_type, parent.name),
            ));
        }
        path.pop();
        built.push(node);
    }
    Ok(built)
}

fn build_mark(schema: &EngineSchema, json: &Value, path: &[usize]) -> Result<EngineMark> {
    let mark_type = json
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::schema_at(path, "mark has no type"))?;
    let spec = schema
        .mark(mark_type)
        .ok_or_else(|| Error::schema_at(path, format!("unknown mark type '{}'", mark_type)))?;
    let attrs = resolve_attrs(json.get("attrs"), &spec.attrs, mark_type, path)?;
    Ok(EngineMark {
        mark_type: mark_type.to_string(),
        attrs,
    })
}

/// Apply declared defaults. Undeclared attributes pass through.
fn resolve_attrs(
    given: Option<&Value>,
    specs: &[AttrSpec],
    owner: &str,
    path: &[usize],
) -> Result<Attrs> {
    let mut attrs = match given {
        None | Some(Value::Null) => Attrs::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(Error::schema_at(path, "attrs must be an object")),
    };
    for spec in specs {
        if attrs.contains_key(&spec.name) {
            continue;
        }
        match spec.default {
            AttrDefault::Required => {
                return Err(Error::schema_at(
                    path,
                    format!("'{}' requires attribute '{}'", owner, spec.name),
                ))
            }
            AttrDefault::Optional => {}
            AttrDefault::Value(ref value) => {
                attrs.insert(spec.name.clone(), value.clone());
            }
        }
    }
    Ok(attrs)
}

/// Engine state: a checked document bound to its schema.
#[derive(Debug, Clone)]
pub struct EngineState {
    doc: EngineNode,
    schema: Arc<EngineSchema>,
}

impl EngineState {
    /// Build a fresh state from a JSON tree.
    pub fn create(schema: Arc<EngineSchema>, json: &Value) -> Result<Self> {
        let doc = EngineNode::from_json(&schema, json)?;
        if doc.node_type != schema.top_node() {
            return Err(Error::Schema(format!(
                "document root must be '{}', found '{}'",
                schema.top_node(),
                doc.node_type
            )));
        }
        Ok(Self { doc, schema })
    }

    /// The document node.
    pub fn doc(&self) -> &EngineNode {
        &self.doc
    }

    /// The schema this state is scoped to.
    pub fn schema(&self) -> &EngineSchema {
        &self.schema
    }

    /// The JSON form of the document.
    pub fn to_json(&self) -> Value {
        self.doc.to_json()
    }
}

/// The built-in engine, checking trees against an [`EngineSchema`].
#[derive(Debug, Clone)]
pub struct SchemaEngine {
    schema: Arc<EngineSchema>,
}

impl SchemaEngine {
    /// Create an engine for the given schema.
    pub fn new(schema: EngineSchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// The schema in use.
    pub fn schema(&self) -> &EngineSchema {
        &self.schema
    }
}

impl Default for SchemaEngine {
    fn default() -> Self {
        Self::new(EngineSchema::rich_text())
    }
}

impl EditorEngine for SchemaEngine {
    type State = EngineState;

    fn name(&self) -> &str {
        "schema"
    }

    fn create_state(&self, doc: &Value) -> Result<EngineState> {
        let state = EngineState::create(Arc::clone(&self.schema), doc)?;
        log::trace!("engine state built with {} nodes", state.doc.node_count());
        Ok(state)
    }

    fn state_to_json(&self, state: &EngineState) -> Value {
        state.to_json()
    }
}
