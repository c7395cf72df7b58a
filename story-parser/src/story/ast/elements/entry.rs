//! Compiled dialogue entries
//!
//!     An entry is one unit of dialogue output. Choice attachments are not entries of their own:
//!     they are stored on the entry that precedes them (see
//!     [EntrySequence](crate::story::dialogue::EntrySequence)). When nothing precedes a choice
//!     block, a [EntryKind::Placeholder] entry exists only to carry the attachment.

/// Speech modifier flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub right_aligned: bool,
    pub hidden_face: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    /// Character table key
    pub speaker: String,
    /// Name shown to the reader; falls back to `speaker`
    pub display_name: String,
    pub modifiers: Modifiers,
    /// Portrait resolved from the character table, `""` when absent
    pub portrait: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Narration { text: String },
    Image { src: String },
    SceneBreak,
    Speech(Speech),
    Placeholder,
}

/// A plain choice: label shown to the reader and the scene it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub next: String,
}

/// A dice choice taken when the roll falls in `min..=max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceChoice {
    pub min: i64,
    pub max: i64,
    pub next: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceChoices {
    pub dice_min: i64,
    pub dice_max: i64,
    pub choices: Vec<DiceChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub choices: Option<Vec<Choice>>,
    pub dice_choices: Option<DiceChoices>,
    /// 1-based line of the block header that produced this entry
    pub line: usize,
}

impl Entry {
    pub fn new(kind: EntryKind, line: usize) -> Self {
        Self {
            kind,
            choices: None,
            dice_choices: None,
            line,
        }
    }

    pub fn placeholder(line: usize) -> Self {
        Self::new(EntryKind::Placeholder, line)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, EntryKind::Placeholder)
    }

    pub fn as_speech(&self) -> Option<&Speech> {
        match &self.kind {
            EntryKind::Speech(speech) => Some(speech),
            _ => None,
        }
    }

    /// Body text of narration and speech entries.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Narration { text } => Some(text),
            EntryKind::Speech(speech) => Some(&speech.text),
            _ => None,
        }
    }
}
