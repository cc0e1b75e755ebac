//! Document ⇄ engine-state conversion.
//!
//! Inbound, a document is font-normalized (or at least cleared of legacy
//! `fontId: null` markers), renamed into the engine vocabulary and handed
//! to the engine. Outbound, the engine's JSON is renamed back and cleared
//! of `fontId: null` again, since engines emit declared attributes with
//! their defaults.
//!
//! # Example
//!
//! ```
//! use richdoc::convert::{from_engine_state, to_engine_state};
//! use richdoc::model::DocNode;
//!
//! let doc = DocNode::doc(vec![DocNode::paragraph(vec![DocNode::text("Hi")])]);
//! let state = to_engine_state(&doc, None)?;
//! assert_eq!(from_engine_state(&state)?, doc);
//! # Ok::<(), richdoc::Error>(())
//! ```

use crate::engine::{EditorEngine, EngineState, SchemaEngine};
use crate::error::Result;
use crate::fonts::FontConfig;
use crate::model::{DocNode, FontIdAttr};
use crate::transform::{from_engine_type, rebuild, to_engine_type, FontRule};

/// Convert a document into a state of the built-in engine.
///
/// With `fonts`, every font id is clamped onto the configuration first.
/// Engine construction errors are returned unchanged.
pub fn to_engine_state(doc: &DocNode, fonts: Option<&FontConfig>) -> Result<EngineState> {
    to_engine_state_with(&SchemaEngine::default(), doc, fonts)
}

/// Convert a state of the built-in engine back into a document.
pub fn from_engine_state(state: &EngineState) -> Result<DocNode> {
    from_engine_state_with(&SchemaEngine::default(), state)
}

/// Convert a document into a state of any engine.
pub fn to_engine_state_with<E: EditorEngine>(
    engine: &E,
    doc: &DocNode,
    fonts: Option<&FontConfig>,
) -> Result<E::State> {
    let prepared = prepare_for_engine(doc, fonts);
    let json = serde_json::to_value(&prepared)?;
    engine.create_state(&json).map_err(|e| {
        log::debug!("engine '{}' rejected document: {}", engine.name(), e);
        e
    })
}

/// Convert a state of any engine back into a document.
pub fn from_engine_state_with<E: EditorEngine>(engine: &E, state: &E::State) -> Result<DocNode> {
    let json = engine.state_to_json(state);
    let tree: DocNode = serde_json::from_value(json)?;
    Ok(restore_from_engine(&tree))
}

/// The tree exactly as it is handed to an engine, in one traversal:
/// font rule first, then `link` → `link_node`.
pub fn prepare_for_engine(doc: &DocNode, fonts: Option<&FontConfig>) -> DocNode {
    let rule = match fonts {
        Some(config) => FontRule::Normalize(config),
        None => {
            if log::log_enabled!(log::Level::Debug) && has_font_ids(doc) {
                log::debug!("document carries font ids but no font configuration was given");
            }
            FontRule::StripNull
        }
    };
    rebuild(doc, &to_engine_type, rule)
}

/// Rename engine output back into the public vocabulary and drop
/// `fontId: null` markers, in one traversal.
pub fn restore_from_engine(tree: &DocNode) -> DocNode {
    rebuild(tree, &from_engine_type, FontRule::StripNull)
}

fn has_font_ids(node: &DocNode) -> bool {
    matches!(node.font_id(), FontIdAttr::Set(_)) || node.children().iter().any(has_font_ids)
}

/// Converter bundling an engine with an optional font configuration.
///
/// # Example
///
/// ```
/// use richdoc::convert::Converter;
/// use richdoc::fonts::FontConfig;
/// use richdoc::model::DocNode;
///
/// let converter = Converter::new().with_fonts(FontConfig::builtin());
/// let doc = DocNode::doc(vec![DocNode::paragraph(vec![]).with_font("ghost")]);
/// let back = converter.round_trip(&doc)?;
/// assert_eq!(back.children()[0].font_id().as_id(), Some("inter"));
/// # Ok::<(), richdoc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter<E: EditorEngine = SchemaEngine> {
    engine: E,
    fonts: Option<FontConfig>,
}

impl Converter<SchemaEngine> {
    /// Create a converter for the built-in engine.
    pub fn new() -> Self {
        Self::with_engine(SchemaEngine::default())
    }
}

impl Default for Converter<SchemaEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EditorEngine> Converter<E> {
    /// Create a converter for a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            fonts: None,
        }
    }

    /// Clamp fonts onto this configuration on the way in.
    pub fn with_fonts(mut self, fonts: FontConfig) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// The engine in use.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The font configuration, if any.
    pub fn fonts(&self) -> Option<&FontConfig> {
        self.fonts.as_ref()
    }

    /// Document → engine state.
    pub fn to_state(&self, doc: &DocNode) -> Result<E::State> {
        to_engine_state_with(&self.engine, doc, self.fonts.as_ref())
    }

    /// Engine state → document.
    pub fn from_state(&self, state: &E::State) -> Result<DocNode> {
        from_engine_state_with(&self.engine, state)
    }

    /// Send a document through the engine and back.
    pub fn round_trip(&self, doc: &DocNode) -> Result<DocNode> {
        let state = self.to_state(doc)?;
        self.from_state(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fonts::FontMeta;
    use crate::model::{Mark, NodeType};
    use serde_json::{json, Value};

    fn parse(value: Value) -> DocNode {
        serde_json::from_value(value).unwrap()
    }

    fn fonts() -> FontConfig {
        FontConfig::new(
            vec![FontMeta::new("inter", "Inter"), FontMeta::new("roboto", "Roboto")],
            "inter",
        )
    }

    #[test]
    fn test_round_trip_without_fonts() {
        let doc = DocNode::doc(vec![
            DocNode::heading(1, vec![DocNode::text("Title")]),
            DocNode::paragraph(vec![
                DocNode::text("plain "),
                DocNode::text("bold").with_mark(Mark::bold()),
                DocNode::text("site").with_mark(Mark::link("https://x.test")),
            ]),
            DocNode::ordered_list(vec![DocNode::list_item(vec![DocNode::paragraph(vec![
                DocNode::text("one"),
            ])])])
            .with_attr("start", 3),
            DocNode::link(
                "https://x.test",
                vec![DocNode::paragraph(vec![DocNode::text("card")])],
            ),
            DocNode::code_block("fn main() {}"),
            DocNode::image("a.png").with_attr("alt", "A"),
        ]);

        let state = to_engine_state(&doc, None).unwrap();
        assert_eq!(from_engine_state(&state).unwrap(), doc);
    }

    #[test]
    fn test_link_travels_as_link_node() {
        let doc = DocNode::doc(vec![DocNode::link("https://x.test", vec![])]);
        let state = to_engine_state(&doc, None).unwrap();
        assert_eq!(state.doc().content.as_ref().unwrap()[0].node_type, "link_node");

        let back = from_engine_state(&state).unwrap();
        assert_eq!(back.children()[0].node_type, NodeType::Link);
    }

    #[test]
    fn test_null_font_cleanup_inbound() {
        let doc = parse(json!({
            "type": "doc",
            "content": [{"type": "bullet_list", "attrs": {"fontId": null}, "content": []}]
        }));
        let prepared = prepare_for_engine(&doc, None);
        assert_eq!(prepared.children()[0].attrs, None);
    }

    #[test]
    fn test_null_font_cleanup_outbound() {
        let doc = parse(json!({
            "type": "doc",
            "content": [{"type": "paragraph", "attrs": {"fontId": null}}]
        }));
        let back = Converter::new().round_trip(&doc).unwrap();
        assert_eq!(back.children()[0].attrs, None);
    }

    #[test]
    fn test_font_clamp_only_with_config() {
        let doc = DocNode::doc(vec![DocNode::paragraph(vec![]).with_font("ghost")]);

        let unclamped = Converter::new().round_trip(&doc).unwrap();
        assert_eq!(unclamped.children()[0].font_id().as_id(), Some("ghost"));

        let clamped = Converter::new().with_fonts(fonts()).round_trip(&doc).unwrap();
        assert_eq!(clamped.children()[0].font_id().as_id(), Some("inter"));
    }

    #[test]
    fn test_construction_error_propagates() {
        let doc = parse(json!({"type": "doc", "content": [{"type": "heading"}]}));
        let err = to_engine_state(&doc, Some(&fonts())).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_input_untouched() {
        let doc = parse(json!({
            "type": "doc",
            "content": [{"type": "link", "attrs": {"href": "h", "fontId": null}}]
        }));
        let before = doc.clone();
        let _ = prepare_for_engine(&doc, Some(&fonts()));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_has_font_ids() {
        let plain = DocNode::doc(vec![DocNode::paragraph(vec![])]);
        assert!(!has_font_ids(&plain));
        let nested = DocNode::doc(vec![DocNode::bullet_list(vec![
            DocNode::list_item(vec![]).with_font("roboto"),
        ])]);
        assert!(has_font_ids(&nested));
    }
}
