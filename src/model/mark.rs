//! Inline mark types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::node::{Attrs, FontIdAttr, FONT_ID_ATTR};

/// Mark type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkType {
    /// `<strong>`
    Bold,
    /// `<em>`
    Italic,
    /// `<u>`
    Underline,
    /// Inline `<code>`
    Code,
    /// Hyperlink (`attrs.href`, `attrs.target`, `attrs.title`)
    Link,
    /// Font span (`attrs.fontId`)
    Font,
    /// Any tag outside the vocabulary
    Other(String),
}

impl MarkType {
    /// Every known mark type.
    pub const KNOWN: [MarkType; 6] = [
        MarkType::Bold,
        MarkType::Italic,
        MarkType::Underline,
        MarkType::Code,
        MarkType::Link,
        MarkType::Font,
    ];

    /// Resolve a mark name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bold" => MarkType::Bold,
            "italic" => MarkType::Italic,
            "underline" => MarkType::Underline,
            "code" => MarkType::Code,
            "link" => MarkType::Link,
            "font" => MarkType::Font,
            other => MarkType::Other(other.to_string()),
        }
    }

    /// The serialized name of this mark type.
    pub fn as_str(&self) -> &str {
        match self {
            MarkType::Bold => "bold",
            MarkType::Italic => "italic",
            MarkType::Underline => "underline",
            MarkType::Code => "code",
            MarkType::Link => "link",
            MarkType::Font => "font",
            MarkType::Other(name) => name,
        }
    }
}

impl From<String> for MarkType {
    fn from(name: String) -> Self {
        match MarkType::from_name(&name) {
            MarkType::Other(_) => MarkType::Other(name),
            known => known,
        }
    }
}

impl From<MarkType> for String {
    fn from(mark_type: MarkType) -> Self {
        match mark_type {
            MarkType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mark applied to a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type tag
    #[serde(rename = "type")]
    pub mark_type: MarkType,

    /// Mark attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
}

impl Mark {
    /// Create a mark without attributes.
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            attrs: None,
        }
    }

    /// Create a bold mark.
    pub fn bold() -> Self {
        Self::new(MarkType::Bold)
    }

    /// Create an italic mark.
    pub fn italic() -> Self {
        Self::new(MarkType::Italic)
    }

    /// Create an underline mark.
    pub fn underline() -> Self {
        Self::new(MarkType::Underline)
    }

    /// Create an inline code mark.
    pub fn code() -> Self {
        Self::new(MarkType::Code)
    }

    /// Create a link mark.
    pub fn link(href: impl Into<String>) -> Self {
        Self::new(MarkType::Link).with_attr("href", href.into())
    }

    /// Create a font mark.
    pub fn font(font_id: impl Into<String>) -> Self {
        Self::new(MarkType::Font).with_attr(FONT_ID_ATTR, font_id.into())
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get a string attribute.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs
            .as_ref()
            .and_then(|a| a.get(key))
            .and_then(Value::as_str)
    }

    /// Get the state of the `fontId` attribute.
    pub fn font_id(&self) -> FontIdAttr<'_> {
        FontIdAttr::of(self.attrs.as_ref())
    }
}
