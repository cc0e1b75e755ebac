//! Boundary to the stateful editing engine.
//!
//! The converters only need two things from an editor: build a state from
//! a JSON tree, and read the tree back out as JSON. [`EditorEngine`] captures
//! exactly that, so hosts can plug in their own engine.
//!
//! # Example
//!
//! ```
//! use richdoc::engine::{EditorEngine, SchemaEngine};
//! use serde_json::json;
//!
//! let engine = SchemaEngine::default();
//! let state = engine
//!     .create_state(&json!({"type": "doc", "content": [{"type": "paragraph"}]}))
//!     .unwrap();
//! assert_eq!(engine.state_to_json(&state)["type"], "doc");
//! ```

mod schema;
mod state;

pub use schema::{AttrDefault, AttrSpec, ContentRule, EngineSchema, Group, MarkSpec, NodeSpec};
pub use state::{EngineMark, EngineNode, EngineState, SchemaEngine};

use crate::error::Result;
use serde_json::Value;

/// Trait for editing engines the converters can target.
///
/// `create_state` raises on trees that do not fit the engine's grammar;
/// those errors are passed through to the caller unchanged.
pub trait EditorEngine: Send + Sync {
    /// The engine's own state container.
    type State;

    /// Get the name of this engine.
    fn name(&self) -> &str;

    /// Build a fresh state from a JSON tree in the engine vocabulary.
    fn create_state(&self, doc: &Value) -> Result<Self::State>;

    /// Serialize the state's document back to JSON.
    fn state_to_json(&self, state: &Self::State) -> Value;
}
