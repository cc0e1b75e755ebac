//! Font configuration and font-id normalization.
//!
//! A [`FontConfig`] lists every font the host knows about, an optional
//! allow-list and a default. Untrusted font ids found in documents are
//! mapped onto that configuration with [`normalize_font_id`]. Bad
//! configurations never produce errors: they degrade to the default id.

mod stacks;

pub use stacks::{font_stack, font_stylesheet, FontStack, FONT_STACKS};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Broad font classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    /// Serif faces
    Serif,
    /// Sans-serif faces
    Sans,
    /// Monospace faces
    Mono,
}

/// Description of a single font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMeta {
    /// Identifier stored in documents and used in CSS class names
    pub id: String,

    /// Human-readable name
    pub label: String,

    /// Optional classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FontCategory>,
}

impl FontMeta {
    /// Create a font description without a category.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: FontCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Fonts available to documents.
///
/// `default_font_id` is expected to appear in `all_fonts`; this is not
/// checked when normalizing, the configured string is returned as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    /// Every font the host knows about
    pub all_fonts: Vec<FontMeta>,

    /// Optional allow-list; `None` or empty means no restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_fonts: Option<Vec<String>>,

    /// Fallback for absent, unknown or disallowed ids
    pub default_font_id: String,
}

impl FontConfig {
    /// Create an unrestricted configuration.
    pub fn new(all_fonts: Vec<FontMeta>, default_font_id: impl Into<String>) -> Self {
        Self {
            all_fonts,
            allowed_fonts: None,
            default_font_id: default_font_id.into(),
        }
    }

    /// Restrict documents to the given font ids.
    pub fn with_allowed<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_fonts = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Configuration covering every entry of the built-in font-stack table,
    /// defaulting to `inter`.
    pub fn builtin() -> Self {
        let fonts = FONT_STACKS
            .iter()
            .map(|s| FontMeta::new(s.id, s.label).with_category(s.category))
            .collect();
        Self::new(fonts, "inter")
    }

    /// Parse a configuration from JSON (`allFonts`, `allowedFonts`, `defaultFontId`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FontConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid font configuration: {}", e)))?;
        if !config.knows(&config.default_font_id) {
            log::warn!(
                "default font '{}' is not listed in allFonts",
                config.default_font_id
            );
        }
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check whether a non-empty allow-list is in effect.
    pub fn is_restricted(&self) -> bool {
        self.allowed_fonts.as_ref().is_some_and(|ids| !ids.is_empty())
    }

    /// Check whether `id` appears in `all_fonts`.
    pub fn knows(&self, id: &str) -> bool {
        self.all_fonts.iter().any(|f| f.id == id)
    }

    /// Check whether `id` passes the allow-list (always true when unrestricted).
    pub fn allows(&self, id: &str) -> bool {
        match self.allowed_fonts {
            Some(ref ids) if !ids.is_empty() => ids.iter().any(|a| a == id),
            _ => true,
        }
    }

    /// Look up a font by id.
    pub fn get(&self, id: &str) -> Option<&FontMeta> {
        self.all_fonts.iter().find(|f| f.id == id)
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Fonts a document may use, in `all_fonts` order.
///
/// Allow-list entries that name no known font are ignored.
pub fn get_available_fonts(config: &FontConfig) -> Vec<&FontMeta> {
    if !config.is_restricted() {
        return config.all_fonts.iter().collect();
    }
    config
        .all_fonts
        .iter()
        .filter(|f| config.allows(&f.id))
        .collect()
}

/// Map an untrusted font id onto the configuration.
///
/// Returns the default when `font_id` is `None`, unknown, or (under a
/// non-empty allow-list) not allowed; otherwise returns `font_id`.
pub fn normalize_font_id<'a>(font_id: Option<&'a str>, config: &'a FontConfig) -> &'a str {
    match font_id {
        Some(id) if config.knows(id) && config.allows(id) => id,
        Some(id) => {
            log::debug!(
                "font '{}' replaced by default '{}'",
                id,
                config.default_font_id
            );
            &config.default_font_id
        }
        None => &config.default_font_id,
    }
}
