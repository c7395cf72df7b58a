//! Section accumulation
//!
//!     The accumulator walks classified lines once and sorts them into buckets. It is the only
//!     stateful part of the front end:
//!         - the active section (none until a section header appears, reset by every field)
//!         - the current scene (set by scene-tagged dialogue headers, kept across fields)
//!         - the story type in effect (a `Quest:` line ends the input for dice stories)
//!
//!     Content lines are stored verbatim with their line numbers. Dialogue lines carry the scene
//!     that was current when they were read; routing them into a flat sequence or per-scene
//!     buffers happens later, once the final story type is known.

use std::collections::BTreeSet;

use tracing::trace;

use crate::story::ast::StoryType;
use crate::story::lexing::{classify_line, FieldKey, LineType, Phase, Section, SourceLine};

/// A dialogue line and the scene it was read under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    pub scene: Option<String>,
    pub line: SourceLine,
}

/// Everything the line-level pass extracts from a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub file_name: String,
    pub chapter_title: String,
    pub scene: String,
    pub story_type: StoryType,
    pub characters: Vec<SourceLine>,
    pub dialogue: Vec<DialogueLine>,
    pub quest: Vec<SourceLine>,
    pub trivia: Vec<SourceLine>,
    /// Scene identifiers in first-seen order
    pub scene_order: Vec<String>,
    pub start_scenes: BTreeSet<String>,
    pub end_scenes: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct SectionAccumulator {
    sections: Sections,
    active: Option<Section>,
    current_scene: Option<String>,
    stopped: bool,
}

impl SectionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Returns `false` once the input has been terminated and further lines
    /// are ignored.
    pub fn push(&mut self, line: SourceLine) -> bool {
        if self.stopped {
            return false;
        }

        match classify_line(&line.text) {
            LineType::Field(key, value) => {
                trace!(line = line.number, ?key, "field");
                self.set_field(key, value);
                self.active = None;
            }
            LineType::SectionHeader(Section::Quest)
                if self.sections.story_type == StoryType::Dice =>
            {
                trace!(line = line.number, "quest header ends dice story");
                self.stopped = true;
                return false;
            }
            LineType::SectionHeader(section) => {
                trace!(line = line.number, ?section, "enter section");
                self.active = Some(section);
            }
            LineType::SceneHeader { scene, phase } => {
                trace!(line = line.number, ?scene, ?phase, "scene header");
                if let Some(scene) = scene {
                    self.enter_scene(scene, phase);
                }
                self.active = Some(Section::Dialogue);
            }
            LineType::Content => self.accumulate(line),
        }
        true
    }

    pub fn finish(self) -> Sections {
        self.sections
    }

    fn set_field(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::FileName => self.sections.file_name = value,
            FieldKey::ChapterTitle => self.sections.chapter_title = value,
            FieldKey::Scene => self.sections.scene = value,
            FieldKey::Type => self.sections.story_type = StoryType::from_field(&value),
        }
    }

    fn enter_scene(&mut self, scene: String, phase: Option<Phase>) {
        if !self.sections.scene_order.contains(&scene) {
            self.sections.scene_order.push(scene.clone());
        }
        match phase {
            Some(Phase::Start) => {
                self.sections.start_scenes.insert(scene.clone());
            }
            Some(Phase::End) => {
                self.sections.end_scenes.insert(scene.clone());
            }
            None => {}
        }
        self.current_scene = Some(scene);
    }

    fn accumulate(&mut self, line: SourceLine) {
        match self.active {
            Some(Section::Characters) => self.sections.characters.push(line),
            Some(Section::Dialogue) => self.sections.dialogue.push(DialogueLine {
                scene: self.current_scene.clone(),
                line,
            }),
            Some(Section::Quest) => self.sections.quest.push(line),
            Some(Section::Trivia) => self.sections.trivia.push(line),
            None => {}
        }
    }
}

/// Run the accumulator over a whole script.
pub fn accumulate(lines: Vec<SourceLine>) -> Sections {
    let mut accumulator = SectionAccumulator::new();
    for line in lines {
        if !accumulator.push(line) {
            break;
        }
    }
    accumulator.finish()
}
