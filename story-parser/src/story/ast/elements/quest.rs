//! Quest block

/// Parsed `Quest:` section. `title` is the first non-blank line, `body` the rest, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestBlock {
    pub title: String,
    pub body: String,
}
