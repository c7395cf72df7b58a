//! Parsing
//!
//!     Parsing takes a whole script in memory and produces a [Document]:
//!         1. Lexing: normalization and line splitting. See [lexing](crate::story::lexing).
//!         2. Accumulation: classified lines sorted into section buckets. See
//!            [sections](crate::story::sections).
//!         3. Building: characters, quest and trivia. See [building](crate::story::building).
//!         4. Dialogue: block splitting and entry compilation, once for simple stories and once
//!            per scene for dice stories. See [dialogue](crate::story::dialogue).
//!
//!     Malformed lines and blocks never fail the parse. They are skipped and recorded as
//!     diagnostics on the document. The only hard failure is the opt-in file name header check
//!     of [ParseOptions::strict].

pub mod options;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

pub use options::ParseOptions;

pub use crate::story::ast::Document;
use crate::story::ast::{
    CharacterTable, Diagnostic, DiagnosticCode, Entry, Scene, SceneGraph, StoryBody, StoryType,
};
use crate::story::building::{build_characters, build_quest, build_trivia};
use crate::story::dialogue::compile_dialogue;
use crate::story::lexing::{split_lines, SourceLine};
use crate::story::sections::{accumulate, DialogueLine, Sections};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("first line must be a 'File name:' header, found '{found}'")]
    MissingFileNameHeader { found: String },
}

/// Parse with default options.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    parse_document_with(source, &ParseOptions::default())
}

pub fn parse_document_with(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let lines = split_lines(source);

    if options.require_file_name_header {
        check_file_name_header(&lines)?;
    }

    let sections = accumulate(lines);
    let mut diagnostics = Vec::new();

    let characters = build_characters(&sections.characters, options, &mut diagnostics);
    let body = match sections.story_type {
        StoryType::Simple => StoryBody::Linear(linear_dialogue(
            &sections.dialogue,
            &characters,
            options,
            &mut diagnostics,
        )),
        StoryType::Dice => StoryBody::Branching(scene_graph(
            &sections,
            &characters,
            options,
            &mut diagnostics,
        )),
    };
    let quest = build_quest(&sections.quest);
    let trivia = build_trivia(&sections.trivia);

    diagnostics.sort_by_key(|diagnostic| diagnostic.line);

    let document = Document {
        file_name: sections.file_name,
        chapter_title: sections.chapter_title,
        scene: sections.scene,
        story_type: sections.story_type,
        characters,
        body,
        quest,
        trivia,
        diagnostics,
    };

    info!(
        story_type = %document.story_type,
        characters = document.characters.len(),
        entries = document.entries().len(),
        scenes = document.scenes().len(),
        diagnostics = document.diagnostics.len(),
        "parsed story"
    );

    Ok(document)
}

fn check_file_name_header(lines: &[SourceLine]) -> Result<(), ParseError> {
    let first = lines
        .iter()
        .map(|line| line.text.trim())
        .find(|text| !text.is_empty())
        .unwrap_or("");
    if first.to_lowercase().starts_with("file name") {
        Ok(())
    } else {
        Err(ParseError::MissingFileNameHeader {
            found: first.to_string(),
        })
    }
}

fn linear_dialogue(
    dialogue: &[DialogueLine],
    characters: &CharacterTable,
    options: &ParseOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry> {
    let lines: Vec<SourceLine> = dialogue.iter().map(|tagged| tagged.line.clone()).collect();
    compile_dialogue(&lines, characters, options, diagnostics)
}

fn scene_graph(
    sections: &Sections,
    characters: &CharacterTable,
    options: &ParseOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> SceneGraph {
    let mut buffers: HashMap<&str, Vec<SourceLine>> = HashMap::new();

    for tagged in &sections.dialogue {
        match &tagged.scene {
            Some(scene) => buffers
                .entry(scene.as_str())
                .or_default()
                .push(tagged.line.clone()),
            None if !tagged.line.text.trim().is_empty() => {
                debug!(line = tagged.line.number, "dropping dialogue outside any scene");
                diagnostics.push(Diagnostic::new(
                    tagged.line.number,
                    DiagnosticCode::UntaggedDialogue,
                    "dice story dialogue must follow a 'Dialogue | scene' header",
                ));
            }
            None => {}
        }
    }

    let scenes = sections
        .scene_order
        .iter()
        .map(|id| {
            let lines = buffers.remove(id.as_str()).unwrap_or_default();
            Scene {
                id: id.clone(),
                entries: compile_dialogue(&lines, characters, options, diagnostics),
                terminal: sections.end_scenes.contains(id),
            }
        })
        .collect();

    SceneGraph {
        scenes,
        start: sections.start_scenes.clone(),
        end: sections.end_scenes.clone(),
    }
}
