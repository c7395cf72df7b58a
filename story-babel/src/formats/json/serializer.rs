//! Serde records for the scene graph
//!
//! The records borrow from the document and mirror the runtime's expected keys exactly;
//! absent optional keys are omitted rather than written as `null`.

use serde::Serialize;
use story_parser::story::ast::{Choice, DiceChoices, Entry, EntryKind, Scene};
use story_parser::{Document, StoryType};

use crate::error::FormatError;

const SIMPLE_CLASS: &str = "dialogue-simple";
const SCENE_BREAK_CLASS: &str = "dialogue-scene-break";

#[derive(Debug, Serialize)]
pub struct StoryGraphRecord<'a> {
    pub scenes: Vec<SceneRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SceneRecord<'a> {
    pub scene: &'a str,
    pub dialogue: Vec<EntryRecord<'a>>,
    #[serde(rename = "final", skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

#[derive(Debug, Serialize)]
pub struct EntryRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait: Option<&'a str>,
    pub modifiers: ModifiersRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceRecord<'a>>>,
    #[serde(rename = "dice-choices", skip_serializing_if = "Option::is_none")]
    pub dice_choices: Option<DiceChoicesRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ModifiersRecord {
    pub class: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

#[derive(Debug, Serialize)]
pub struct ChoiceRecord<'a> {
    pub text: &'a str,
    pub next: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DiceChoicesRecord<'a> {
    #[serde(rename = "dice-min")]
    pub dice_min: i64,
    #[serde(rename = "dice-max")]
    pub dice_max: i64,
    pub choices: Vec<DiceChoiceRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DiceChoiceRecord<'a> {
    #[serde(rename = "dice-min")]
    pub dice_min: i64,
    #[serde(rename = "dice-max")]
    pub dice_max: i64,
    pub next: &'a str,
}

/// Build the scene graph record, or fail for non-dice stories.
pub fn scene_graph_record(doc: &Document) -> Result<StoryGraphRecord<'_>, FormatError> {
    if doc.story_type != StoryType::Dice {
        return Err(FormatError::ModeMismatch {
            found: doc.story_type,
        });
    }
    Ok(StoryGraphRecord {
        scenes: doc.scenes().iter().map(scene_record).collect(),
    })
}

fn scene_record(scene: &Scene) -> SceneRecord<'_> {
    SceneRecord {
        scene: &scene.id,
        dialogue: scene.entries.iter().map(entry_record).collect(),
        terminal: scene.terminal,
    }
}

fn entry_record(entry: &Entry) -> EntryRecord<'_> {
    let simple = |class, text| EntryRecord {
        name: None,
        portrait: None,
        modifiers: ModifiersRecord {
            class,
            hidden: false,
        },
        text,
        choices: None,
        dice_choices: None,
    };

    let mut record = match &entry.kind {
        EntryKind::Narration { text } => simple(SIMPLE_CLASS, Some(text.clone())),
        EntryKind::Image { src } => simple(SIMPLE_CLASS, Some(format!("<img src=\"{src}\">"))),
        EntryKind::SceneBreak => simple(SCENE_BREAK_CLASS, None),
        EntryKind::Placeholder => simple(SIMPLE_CLASS, None),
        EntryKind::Speech(speech) => EntryRecord {
            name: Some(speech.display_name.as_str()),
            portrait: Some(speech.portrait.as_str()),
            modifiers: ModifiersRecord {
                class: if speech.modifiers.right_aligned {
                    "dialogue-container-right"
                } else {
                    "dialogue-container"
                },
                hidden: speech.modifiers.hidden_face,
            },
            text: (!speech.text.is_empty()).then(|| speech.text.clone()),
            choices: None,
            dice_choices: None,
        },
    };

    record.choices = entry.choices.as_deref().map(choice_records);
    record.dice_choices = entry.dice_choices.as_ref().map(dice_record);
    record
}

fn choice_records(choices: &[Choice]) -> Vec<ChoiceRecord<'_>> {
    choices
        .iter()
        .map(|choice| ChoiceRecord {
            text: &choice.label,
            next: &choice.next,
        })
        .collect()
}

fn dice_record(dice: &DiceChoices) -> DiceChoicesRecord<'_> {
    DiceChoicesRecord {
        dice_min: dice.dice_min,
        dice_max: dice.dice_max,
        choices: dice
            .choices
            .iter()
            .map(|choice| DiceChoiceRecord {
                dice_min: choice.min,
                dice_max: choice.max,
                next: &choice.next,
            })
            .collect(),
    }
}
