//! Document root
//!
//!     A [Document] is the result of parsing one story script. It is built once and not mutated
//!     afterwards; renderers only borrow it.

use std::fmt;
use std::path::Path;

use super::character::CharacterTable;
use super::entry::Entry;
use super::quest::QuestBlock;
use super::scene::{Scene, SceneGraph};
use crate::story::ast::diagnostics::Diagnostic;

/// Story mode declared by the `Type:` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoryType {
    #[default]
    Simple,
    Dice,
}

impl StoryType {
    /// Lower-cased `Type:` value; anything but `dice` is `simple`.
    pub fn from_field(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "dice" => StoryType::Dice,
            _ => StoryType::Simple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoryType::Simple => "simple",
            StoryType::Dice => "dice",
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryBody {
    Linear(Vec<Entry>),
    Branching(SceneGraph),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub chapter_title: String,
    pub scene: String,
    pub story_type: StoryType,
    pub characters: CharacterTable,
    pub body: StoryBody,
    pub quest: Option<QuestBlock>,
    pub trivia: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Entries of a simple story; empty for dice stories.
    pub fn entries(&self) -> &[Entry] {
        match &self.body {
            StoryBody::Linear(entries) => entries,
            StoryBody::Branching(_) => &[],
        }
    }

    /// Scenes of a dice story; empty for simple stories.
    pub fn scenes(&self) -> &[Scene] {
        match &self.body {
            StoryBody::Linear(_) => &[],
            StoryBody::Branching(graph) => &graph.scenes,
        }
    }

    pub fn scene_graph(&self) -> Option<&SceneGraph> {
        match &self.body {
            StoryBody::Linear(_) => None,
            StoryBody::Branching(graph) => Some(graph),
        }
    }

    pub fn is_dice(&self) -> bool {
        self.story_type == StoryType::Dice
    }

    /// Declared file name with its extension forced to `.html`; empty stays empty.
    pub fn output_file_name(&self) -> String {
        let name = self.file_name.trim();
        if name.is_empty() {
            return String::new();
        }
        Path::new(name)
            .with_extension("html")
            .to_string_lossy()
            .into_owned()
    }

    /// Declared file name without extension, if any.
    pub fn file_stem(&self) -> Option<String> {
        Path::new(self.file_name.trim())
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
    }
}
