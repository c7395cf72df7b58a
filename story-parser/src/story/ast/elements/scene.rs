//! Scenes and the scene graph of dice stories
//!
//! Scenes link to each other only through the `next` identifiers of their choices. The graph
//! is never validated here: dangling targets and cycles are the runtime's concern.

use std::collections::BTreeSet;

use super::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub id: String,
    pub entries: Vec<Entry>,
    /// Tagged `end` by at least one dialogue header
    pub terminal: bool,
}

impl Scene {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
            terminal: false,
        }
    }
}

/// Scenes in first-seen order plus the start and end sets declared by headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneGraph {
    pub scenes: Vec<Scene>,
    pub start: BTreeSet<String>,
    pub end: BTreeSet<String>,
}

impl SceneGraph {
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
