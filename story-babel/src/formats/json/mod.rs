//! JSON scene graph format
//!
//! Only dice stories have a scene graph. Serializing a simple story fails with
//! [FormatError::ModeMismatch] and produces no output at all.
//!
//! Output shape:
//!
//! ```json
//! {
//!   "scenes": [
//!     {
//!       "scene": "Intro",
//!       "dialogue": [
//!         { "modifiers": { "class": "dialogue-simple" }, "text": "..." },
//!         { "name": "Nora", "portrait": "nora.png",
//!           "modifiers": { "class": "dialogue-container-right", "hidden": true },
//!           "text": "...",
//!           "choices": [{ "text": "Left", "next": "LeftPath" }] }
//!       ]
//!     },
//!     { "scene": "Home", "dialogue": [], "final": true }
//!   ]
//! }
//! ```
//!
//! The document is pretty printed with two-space indentation and non-ASCII text is written
//! as is.

mod serializer;

use story_parser::Document;

use crate::error::FormatError;
use crate::format::Format;

pub use serializer::{scene_graph_record, StoryGraphRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Scene graph for the dice story runtime (dice stories only)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let record = scene_graph_record(doc)?;
        Ok(serde_json::to_string_pretty(&record)?)
    }
}
