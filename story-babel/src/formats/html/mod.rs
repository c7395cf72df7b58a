//! HTML format implementation
//!
//! Strategy: direct story AST → HTML page generation (one-way only)
//!
//! # Data Model
//!
//! | Story element     | HTML                                                    |
//! |-------------------|---------------------------------------------------------|
//! | Narration         | `<div class="dialogue-simple"><p>`                      |
//! | Image             | `<div class="dialogue-simple"><img>`                    |
//! | SceneBreak        | `<hr class="dialogue-scene-break">`                     |
//! | Speech            | `dialogue-container` or `dialogue-container-right`      |
//! | Placeholder       | nothing                                                 |
//! | Character         | `character-card` in the showcase, if it has a full body |
//! | Quest / Trivia    | cards after the showcase                                |
//!
//! Choice attachments are not rendered: the dice runtime reads them from the JSON scene graph.
//! For dice stories the dialogue stage stays empty and carries `data-story-file`,
//! `data-start-scene` and `data-end-sections` for that runtime.
//!
//! Text is inserted as authored. Scripts are trusted site content and may carry inline markup
//! such as `<button>` in quest bodies, so nothing is escaped.
//!
//! # Options
//!
//! Page chrome comes from [HtmlOptions]. When serializing through the registry, options can be
//! overridden with string keys: `site-name`, `site-url`, `asset-prefix`, `story-json-dir` and
//! `story-stem`.

mod inline;
mod serializer;

use std::collections::HashMap;

use story_parser::Document;

use crate::error::FormatError;
use crate::format::Format;

pub use inline::render_inlines;
pub use serializer::{render_entry, render_page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub site_name: String,
    pub site_url: String,
    /// Prefix for site assets (styles, includes, images), relative to the page
    pub asset_prefix: String,
    /// Directory of story JSON files, as seen by the dice runtime
    pub story_json_dir: String,
    /// Stem of the story JSON file; falls back to the declared file name
    pub story_stem: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            site_name: "Pufflings".to_string(),
            site_url: "https://pufflings.github.io/Masterlist/".to_string(),
            asset_prefix: "../".to_string(),
            story_json_dir: "prompts/CYOA".to_string(),
            story_stem: None,
        }
    }
}

impl HtmlOptions {
    /// Overlay string options on top of these options. Unknown keys are ignored.
    pub fn with_overrides(mut self, options: &HashMap<String, String>) -> Self {
        for (key, value) in options {
            match key.as_str() {
                "site-name" => self.site_name = value.clone(),
                "site-url" => self.site_url = value.clone(),
                "asset-prefix" => self.asset_prefix = value.clone(),
                "story-json-dir" => self.story_json_dir = value.clone(),
                "story-stem" => self.story_stem = Some(value.clone()),
                _ => {}
            }
        }
        self
    }

    /// JSON path announced to the dice runtime: `<dir>/<stem>.json`.
    pub fn story_file(&self, doc: &Document) -> String {
        let stem = self
            .story_stem
            .clone()
            .or_else(|| doc.file_stem())
            .unwrap_or_else(|| "story".to_string());
        let dir = self.story_json_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{stem}.json")
        } else {
            format!("{dir}/{stem}.json")
        }
    }
}

/// HTML page format
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Story page with dialogue stage, character showcase, trivia and quest"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_page(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.clone().with_overrides(options);
        Ok(render_page(doc, &options))
    }
}
