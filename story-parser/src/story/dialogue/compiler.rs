//! Entry compiler
//!
//!     Compiles dialogue blocks into entries. The compiler walks blocks in order and appends to
//!     an [EntrySequence]; choice blocks mutate the last entry of that sequence instead of
//!     adding one. A choice block with nothing before it gets a placeholder entry to hang on.
//!
//!     Body content of a block is the trimmed text after the closing bracket, joined by a
//!     newline with the following lines when they are not blank, and trimmed again. Blank lines
//!     inside the body survive, which keeps multi-paragraph speech intact.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::header::{parse_header, HeaderKind};
use super::splitter::{split_blocks, Block};
use crate::story::ast::{
    CharacterTable, Choice, DiceChoice, DiceChoices, Diagnostic, DiagnosticCode, Entry,
    EntryKind, Modifiers, Speech,
};
use crate::story::lexing::SourceLine;
use crate::story::parsing::ParseOptions;

static DICE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*-\s*([0-9]+)$").expect("valid dice range regex"));

/// Append-only entry list with choice attachment.
#[derive(Debug, Default)]
pub struct EntrySequence {
    entries: Vec<Entry>,
}

impl EntrySequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Attach plain choices to the last entry, replacing earlier plain choices.
    pub fn attach_choices(&mut self, choices: Vec<Choice>, line: usize) {
        self.receiver(line).choices = Some(choices);
    }

    /// Attach dice choices to the last entry, replacing earlier dice choices.
    pub fn attach_dice(&mut self, dice: DiceChoices, line: usize) {
        self.receiver(line).dice_choices = Some(dice);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    fn receiver(&mut self, line: usize) -> &mut Entry {
        if self.entries.is_empty() {
            debug!(line, "choices without a preceding entry, adding placeholder");
            self.entries.push(Entry::placeholder(line));
        }
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }
}

pub struct EntryCompiler<'a> {
    characters: &'a CharacterTable,
    options: &'a ParseOptions,
    diagnostics: &'a mut Vec<Diagnostic>,
    sequence: EntrySequence,
}

impl<'a> EntryCompiler<'a> {
    pub fn new(
        characters: &'a CharacterTable,
        options: &'a ParseOptions,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            characters,
            options,
            diagnostics,
            sequence: EntrySequence::new(),
        }
    }

    pub fn compile_block(&mut self, block: &Block) {
        let line = block.header.number;
        let Some(header) = parse_header(&block.header.text) else {
            debug!(line, "skipping block with malformed header");
            self.diagnostics.push(Diagnostic::new(
                line,
                DiagnosticCode::MalformedHeader,
                format!("not a [header]: '{}'", block.header.text.trim()),
            ));
            return;
        };

        match header.kind(self.options) {
            HeaderKind::Narration => {
                let text = block_content(&header.inline, &block.body);
                self.sequence
                    .push(Entry::new(EntryKind::Narration { text }, line));
            }
            HeaderKind::Image => {
                let src = block_content(&header.inline, &block.body);
                self.sequence.push(Entry::new(EntryKind::Image { src }, line));
            }
            HeaderKind::SceneBreak => {
                self.sequence.push(Entry::new(EntryKind::SceneBreak, line));
            }
            HeaderKind::Choices => {
                let choices = self.plain_choices(&header.inline, block);
                self.sequence.attach_choices(choices, line);
            }
            HeaderKind::DiceChoices { dice_min, dice_max } => {
                let choices = self.dice_choices(&header.inline, block);
                self.sequence.attach_dice(
                    DiceChoices {
                        dice_min,
                        dice_max,
                        choices,
                    },
                    line,
                );
            }
            HeaderKind::Speaker {
                key,
                display_name,
                modifiers,
            } => {
                let modifiers = self.modifiers(&modifiers, line);
                let speech = Speech {
                    portrait: self.characters.portrait_for(&key).to_string(),
                    speaker: key,
                    display_name,
                    modifiers,
                    text: block_content(&header.inline, &block.body),
                };
                self.sequence.push(Entry::new(EntryKind::Speech(speech), line));
            }
        }
    }

    pub fn finish(self) -> Vec<Entry> {
        self.sequence.into_entries()
    }

    fn modifiers(&mut self, tokens: &[String], line: usize) -> Modifiers {
        let mut modifiers = Modifiers::default();
        for token in tokens {
            let right = token.contains("right");
            let hidden = token.contains("hidden");
            modifiers.right_aligned |= right;
            modifiers.hidden_face |= hidden;
            if !right && !hidden {
                self.diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticCode::UnknownModifier,
                    format!("unknown modifier '{token}' is ignored"),
                ));
            }
        }
        modifiers
    }

    fn plain_choices(&mut self, inline: &str, block: &Block) -> Vec<Choice> {
        let mut choices = Vec::new();
        for (number, text) in content_lines(block.header.number, inline, &block.body) {
            match text.split_once('|') {
                Some((label, next)) => choices.push(Choice {
                    label: label.trim().to_string(),
                    next: next.trim().to_string(),
                }),
                None => self.invalid_choice(number, text, "expected 'label | scene'"),
            }
        }
        choices
    }

    fn dice_choices(&mut self, inline: &str, block: &Block) -> Vec<DiceChoice> {
        let mut choices = Vec::new();
        for (number, text) in content_lines(block.header.number, inline, &block.body) {
            match text.split_once('|').and_then(|(range, next)| {
                let (min, max) = dice_range(range.trim())?;
                Some(DiceChoice {
                    min,
                    max,
                    next: next.trim().to_string(),
                })
            }) {
                Some(choice) => choices.push(choice),
                None => self.invalid_choice(number, text, "expected 'min-max | scene'"),
            }
        }
        choices
    }

    fn invalid_choice(&mut self, line: usize, text: &str, expected: &str) {
        debug!(line, "dropping choice line");
        self.diagnostics.push(Diagnostic::new(
            line,
            DiagnosticCode::InvalidChoiceLine,
            format!("{expected}, found '{}'", text.trim()),
        ));
    }
}

/// Compile a dialogue buffer into entries.
pub fn compile_dialogue(
    lines: &[SourceLine],
    characters: &CharacterTable,
    options: &ParseOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry> {
    let blocks = split_blocks(lines, diagnostics);
    let mut compiler = EntryCompiler::new(characters, options, diagnostics);
    for block in &blocks {
        compiler.compile_block(block);
    }
    compiler.finish()
}

fn block_content(inline: &str, body: &[SourceLine]) -> String {
    let trailing = body
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if trailing.trim().is_empty() {
        return inline.to_string();
    }
    format!("{inline}\n{trailing}").trim().to_string()
}

/// Non-blank content lines with their line numbers, inline content first.
fn content_lines<'b>(
    header_line: usize,
    inline: &'b str,
    body: &'b [SourceLine],
) -> impl Iterator<Item = (usize, &'b str)> {
    std::iter::once((header_line, inline))
        .chain(body.iter().map(|line| (line.number, line.text.as_str())))
        .filter(|(_, text)| !text.trim().is_empty())
}

fn dice_range(range: &str) -> Option<(i64, i64)> {
    let captures = DICE_RANGE.captures(range)?;
    let min = captures[1].parse().ok()?;
    let max = captures[2].parse().ok()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::ast::Character;
    use crate::story::lexing::split_lines;

    fn table() -> CharacterTable {
        let mut table = CharacterTable::new();
        table.insert(Character {
            portrait: Some("nora.png".into()),
            ..Character::new("Nora")
        });
        table.insert(Character::new("Pip"));
        table
    }

    fn compile(source: &str) -> (Vec<Entry>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let entries = compile_dialogue(
            &split_lines(source),
            &table(),
            &ParseOptions::default(),
            &mut diagnostics,
        );
        (entries, diagnostics)
    }

    #[test]
    fn test_narration_joins_inline_and_body() {
        let (entries, _) = compile("[narration] The wind rose.\n\nLeaves fell.\n\n");
        assert_eq!(
            entries[0].kind,
            EntryKind::Narration {
                text: "The wind rose.\n\nLeaves fell.".into()
            }
        );
    }

    #[test]
    fn test_speech_resolves_portrait() {
        let (entries, _) = compile("[Nora | | right, hidden]\nHello!\n[Pip] Hi.\n[Ghost] Boo.");
        let nora = entries[0].as_speech().expect("speech");
        assert_eq!(nora.display_name, "Nora");
        assert_eq!(nora.portrait, "nora.png");
        assert!(nora.modifiers.right_aligned);
        assert!(nora.modifiers.hidden_face);
        assert_eq!(nora.text, "Hello!");

        assert_eq!(entries[1].as_speech().expect("speech").portrait, "");
        assert_eq!(entries[2].as_speech().expect("speech").portrait, "");
    }

    #[test]
    fn test_modifiers_match_by_substring() {
        let (entries, diagnostics) = compile("[Nora | N | align-right, sparkle]");
        let speech = entries[0].as_speech().expect("speech");
        assert!(speech.modifiers.right_aligned);
        assert!(!speech.modifiers.hidden_face);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::UnknownModifier);
    }

    #[test]
    fn test_image_and_scene_break() {
        let (entries, _) = compile("[image]\n  pics/forest.png  \n[scene break]\nignored");
        assert_eq!(
            entries[0].kind,
            EntryKind::Image {
                src: "pics/forest.png".into()
            }
        );
        assert_eq!(entries[1].kind, EntryKind::SceneBreak);
    }

    #[test]
    fn test_dice_choices_attach_to_previous_entry() {
        let (entries, diagnostics) =
            compile("[narration] Roll!\n[choices | dice | 1 | 20]\n1-10|SceneA\n11 - 20 | SceneB\nbad|SceneC");
        assert_eq!(entries.len(), 1);
        let dice = entries[0].dice_choices.as_ref().expect("dice");
        assert_eq!(dice.dice_min, 1);
        assert_eq!(dice.dice_max, 20);
        assert_eq!(
            dice.choices,
            vec![
                DiceChoice {
                    min: 1,
                    max: 10,
                    next: "SceneA".into()
                },
                DiceChoice {
                    min: 11,
                    max: 20,
                    next: "SceneB".into()
                },
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidChoiceLine);
        assert_eq!(diagnostics[0].line, 5);
    }

    #[test]
    fn test_dice_range_overflow_is_dropped() {
        let (entries, diagnostics) =
            compile("[narration] Roll!\n[choices | dice | 1 | 6]\n99999999999999999999-1 | X\n1-6 | Y");
        let dice = entries[0].dice_choices.as_ref().expect("dice");
        assert_eq!(
            dice.choices,
            vec![DiceChoice {
                min: 1,
                max: 6,
                next: "Y".into()
            }]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidChoiceLine);
        assert_eq!(diagnostics[0].line, 3);
    }

    #[test]
    fn test_first_choice_block_creates_placeholder() {
        let (entries, _) = compile("[choices]\nGo left | Left\nno pipe here\n[Pip] After");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_placeholder());
        assert_eq!(
            entries[0].choices,
            Some(vec![Choice {
                label: "Go left".into(),
                next: "Left".into()
            }])
        );
    }

    #[test]
    fn test_plain_and_dice_coexist_and_replace_same_kind() {
        let (entries, _) = compile(
            "[narration] x\n[choices]\nA | One\n[choices]\nB | Two\n[choices | dice]\n1-20 | Three",
        );
        assert_eq!(entries.len(), 1);
        let choices = entries[0].choices.as_ref().expect("choices");
        assert_eq!(choices[0].label, "B");
        assert!(entries[0].dice_choices.is_some());
    }

    #[test]
    fn test_inline_choice_line() {
        let (entries, _) = compile("[Pip] Where?\n[choices] Home | Burrow");
        assert_eq!(
            entries[0].choices.as_ref().map(|c| c[0].next.as_str()),
            Some("Burrow")
        );
    }

    #[test]
    fn test_malformed_header_is_skipped() {
        let (entries, diagnostics) = compile("[narration] ok\n[] broken\nstill broken");
        assert_eq!(entries.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::MalformedHeader);
        assert_eq!(diagnostics[0].line, 2);
    }
}
