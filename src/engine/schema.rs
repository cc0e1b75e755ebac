//! Engine schema: node and mark specifications.

use serde_json::Value;

/// Placement group a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Block-level content
    Block,
    /// Inline content
    Inline,
}

/// Which children a node accepts. Children are always zero-or-more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRule {
    /// No children
    Leaf,
    /// Any node belonging to one of the groups
    Groups(Vec<Group>),
    /// Only nodes of the named type
    Only(String),
}

/// How an attribute behaves when a node omits it.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrDefault {
    /// Construction fails
    Required,
    /// Left out
    Optional,
    /// Filled in with the value
    Value(Value),
}

/// Declared attribute of a node or mark.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrSpec {
    /// Attribute key
    pub name: String,
    /// Behaviour when absent
    pub default: AttrDefault,
}

impl AttrSpec {
    /// Declare a required attribute.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::Required,
        }
    }

    /// Declare an optional attribute.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::Optional,
        }
    }

    /// Declare an attribute with a default value.
    pub fn with_default(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: AttrDefault::Value(value.into()),
        }
    }
}

/// Specification of one node type.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    /// Type name as seen by the engine
    pub name: String,
    /// Groups this node can be placed in
    pub groups: Vec<Group>,
    /// Accepted children
    pub content: ContentRule,
    /// Declared attributes
    pub attrs: Vec<AttrSpec>,
}

impl NodeSpec {
    /// Create a spec with no groups, no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            content: ContentRule::Leaf,
            attrs: Vec::new(),
        }
    }

    /// Set the groups.
    pub fn in_groups(mut self, groups: &[Group]) -> Self {
        self.groups = groups.to_vec();
        self
    }

    /// Set the content rule.
    pub fn with_content(mut self, content: ContentRule) -> Self {
        self.content = content;
        self
    }

    /// Declare an attribute.
    pub fn with_attr(mut self, attr: AttrSpec) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Check if this is the text leaf.
    pub fn is_text(&self) -> bool {
        self.name == "text"
    }

    /// Check if this node is placed inline (and may carry marks).
    pub fn is_inline(&self) -> bool {
        self.groups.contains(&Group::Inline)
    }

    /// Check whether `child` may appear directly inside this node.
    pub fn accepts(&self, child: &NodeSpec) -> bool {
        match self.content {
            ContentRule::Leaf => false,
            ContentRule::Groups(ref groups) => child.groups.iter().any(|g| groups.contains(g)),
            ContentRule::Only(ref name) => &child.name == name,
        }
    }
}

/// Specification of one mark type.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSpec {
    /// Mark name
    pub name: String,
    /// Declared attributes
    pub attrs: Vec<AttrSpec>,
}

impl MarkSpec {
    /// Create a mark spec without attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Declare an attribute.
    pub fn with_attr(mut self, attr: AttrSpec) -> Self {
        self.attrs.push(attr);
        self
    }
}

/// The grammar an engine checks trees against.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSchema {
    nodes: Vec<NodeSpec>,
    marks: Vec<MarkSpec>,
    top_node: String,
}

impl EngineSchema {
    /// Create an empty schema whose root must be `top_node`.
    pub fn new(top_node: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            marks: Vec::new(),
            top_node: top_node.into(),
        }
    }

    /// Add or replace a node spec.
    pub fn with_node(mut self, spec: NodeSpec) -> Self {
        self.nodes.retain(|n| n.name != spec.name);
        self.nodes.push(spec);
        self
    }

    /// Add or replace a mark spec.
    pub fn with_mark(mut self, spec: MarkSpec) -> Self {
        self.marks.retain(|m| m.name != spec.name);
        self.marks.push(spec);
        self
    }

    /// Look up a node spec.
    pub fn node(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Look up a mark spec.
    pub fn mark(&self, name: &str) -> Option<&MarkSpec> {
        self.marks.iter().find(|m| m.name == name)
    }

    /// Name of the required root type.
    pub fn top_node(&self) -> &str {
        &self.top_node
    }

    /// The rich-text schema documents are converted into.
    ///
    /// Block nodes that can carry a font declare `fontId` with a `null`
    /// default, so engine output always has the key.
    pub fn rich_text() -> Self {
        use Group::{Block, Inline};

        let font = || AttrSpec::with_default("fontId", Value::Null);

        Self::new("doc")
            .with_node(NodeSpec::new("doc").with_content(ContentRule::Groups(vec![Block])))
            .with_node(
                NodeSpec::new("paragraph")
                    .in_groups(&[Block])
                    .with_content(ContentRule::Groups(vec![Inline]))
                    .with_attr(font()),
            )
            .with_node(
                NodeSpec::new("heading")
                    .in_groups(&[Block])
                    .with_content(ContentRule::Groups(vec![Inline]))
                    .with_attr(AttrSpec::required("level"))
                    .with_attr(font()),
            )
            .with_node(
                NodeSpec::new("bullet_list")
                    .in_groups(&[Block])
                    .with_content(ContentRule::Only("list_item".into())),
            )
            .with_node(
                NodeSpec::new("ordered_list")
                    .in_groups(&[Block])
                    .with_content(ContentRule::Only("list_item".into()))
                    .with_attr(AttrSpec::optional("start")),
            )
            .with_node(
                NodeSpec::new("list_item")
                    .with_content(ContentRule::Groups(vec![Block]))
                    .with_attr(font()),
            )
            .with_node(
                NodeSpec::new("image")
                    .in_groups(&[Block, Inline])
                    .with_attr(AttrSpec::required("src"))
                    .with_attr(AttrSpec::optional("alt"))
                    .with_attr(AttrSpec::optional("title")),
            )
            .with_node(
                NodeSpec::new("link_node")
                    .in_groups(&[Block, Inline])
                    .with_content(ContentRule::Groups(vec![Block, Inline]))
                    .with_attr(AttrSpec::required("href"))
                    .with_attr(AttrSpec::optional("target"))
                    .with_attr(AttrSpec::optional("title")),
            )
            .with_node(
                NodeSpec::new("code_block")
                    .in_groups(&[Block])
                    .with_content(ContentRule::Only("text".into()))
                    .with_attr(AttrSpec::optional("language")),
            )
            .with_node(NodeSpec::new("text").in_groups(&[Inline]))
            .with_mark(MarkSpec::new("bold"))
            .with_mark(MarkSpec::new("italic"))
            .with_mark(MarkSpec::new("underline"))
            .with_mark(MarkSpec::new("code"))
            .with_mark(
                MarkSpec::new("link")
                    .with_attr(AttrSpec::required("href"))
                    .with_attr(AttrSpec::optional("target"))
                    .with_attr(AttrSpec::optional("title")),
            )
            .with_mark(MarkSpec::new("font").with_attr(AttrSpec::optional("fontId")))
    }
}

impl Default for EngineSchema {
    fn default() -> Self {
        Self::rich_text()
    }
}
