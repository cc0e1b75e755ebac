//! HTML rendering options.

use crate::fonts::FontConfig;
use serde_json::Value;

/// Options for rendering a document to HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Font configuration used to resolve font classes
    pub fonts: Option<FontConfig>,

    /// Clamp heading levels into 1..=6
    pub clamp_headings: bool,

    /// Wrap the fragment into a complete HTML5 document
    pub standalone: bool,

    /// Document title for standalone output
    pub title: Option<String>,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve font classes against a configuration.
    pub fn with_fonts(mut self, fonts: FontConfig) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Resolve font classes against an optional configuration.
    pub fn with_optional_fonts(mut self, fonts: Option<FontConfig>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Clamp heading levels into 1..=6.
    pub fn with_clamped_headings(mut self, clamp: bool) -> Self {
        self.clamp_headings = clamp;
        self
    }

    /// Emit a complete HTML5 document.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the standalone document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Heading tag level for a raw `attrs.level` value.
    ///
    /// Integers, whole floats and integer strings are read as given.
    /// Anything else, including a missing level, renders as 1.
    pub fn heading_level(&self, level: Option<&Value>) -> i64 {
        let level = level.and_then(level_number).unwrap_or(1);
        if self.clamp_headings {
            level.clamp(1, 6)
        } else {
            level
        }
    }
}

fn level_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let options = HtmlOptions::default();
        assert!(options.fonts.is_none());
        assert!(!options.clamp_headings);
        assert!(!options.standalone);
    }

    #[test]
    fn test_builder() {
        let options = HtmlOptions::new()
            .with_fonts(FontConfig::builtin())
            .with_standalone(true)
            .with_title("Notes");
        assert!(options.fonts.is_some());
        assert!(options.standalone);
        assert_eq!(options.title.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_heading_level() {
        let permissive = HtmlOptions::new();
        assert_eq!(permissive.heading_level(Some(&json!(27))), 27);
        assert_eq!(permissive.heading_level(None), 1);
        assert_eq!(permissive.heading_level(Some(&Value::Null)), 1);

        let clamped = HtmlOptions::new().with_clamped_headings(true);
        assert_eq!(clamped.heading_level(Some(&json!(27))), 6);
        assert_eq!(clamped.heading_level(Some(&json!(0))), 1);
        assert_eq!(clamped.heading_level(Some(&json!(3))), 3);
    }

    #[test]
    fn test_heading_level_loose_values() {
        let options = HtmlOptions::new();
        assert_eq!(options.heading_level(Some(&json!("2"))), 2);
        assert_eq!(options.heading_level(Some(&json!(" 4 "))), 4);
        assert_eq!(options.heading_level(Some(&json!(2.0))), 2);
        assert_eq!(options.heading_level(Some(&json!(2.5))), 1);
        assert_eq!(options.heading_level(Some(&json!("two"))), 1);
        assert_eq!(options.heading_level(Some(&json!(true))), 1);
        assert_eq!(options.heading_level(Some(&json!(1e300))), 1);
    }
}
