//! Characters and the insertion-ordered character table
//!
//! Character lines look like `Name | FullBody | Portrait | Profile | Description`. Absent
//! fields are stored as `None`; the table never holds a literal `-`.

use std::collections::HashMap;

/// One entry of the `Characters:` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub full_body: Option<String>,
    pub portrait: Option<String>,
    pub profile: Option<String>,
    pub description: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_body: None,
            portrait: None,
            profile: None,
            description: None,
        }
    }

    /// Only characters with a full-body image appear in the end-of-chapter showcase.
    pub fn in_showcase(&self) -> bool {
        self.full_body.is_some()
    }

    /// Portrait reference as rendered: empty when absent.
    pub fn portrait_src(&self) -> &str {
        self.portrait.as_deref().unwrap_or("")
    }

    /// Key used by the showcase overlay (`data-character`).
    pub fn showcase_key(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// Character directory keyed by name.
///
/// Iteration follows first-insertion order. Re-inserting a name replaces the record but keeps
/// its original position, so rendering the same input twice is byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterTable {
    order: Vec<String>,
    by_name: HashMap<String, Character>,
}

impl CharacterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character; the last occurrence of a name wins.
    pub fn insert(&mut self, character: Character) {
        if !self.by_name.contains_key(&character.name) {
            self.order.push(character.name.clone());
        }
        self.by_name.insert(character.name.clone(), character);
    }

    pub fn get(&self, name: &str) -> Option<&Character> {
        self.by_name.get(name)
    }

    /// Portrait for a speaker key. Unknown speakers and missing portraits both yield `""`.
    pub fn portrait_for(&self, name: &str) -> &str {
        self.get(name).map(Character::portrait_src).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.order.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn showcase(&self) -> impl Iterator<Item = &Character> {
        self.iter().filter(|c| c.in_showcase())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
