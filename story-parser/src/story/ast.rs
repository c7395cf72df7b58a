//! Abstract syntax tree for story scripts
//!
//!     The AST is built once per input by [parse_document](crate::story::parsing::parse_document)
//!     and never mutated afterwards. The `Document` owns everything: the character table, the
//!     compiled dialogue (a flat entry list for simple stories, a scene graph for dice stories),
//!     the optional quest and trivia blocks, and the diagnostics collected while parsing.
//!
//!     Scenes reference each other by identifier string only (see [Choice] and [DiceChoice]), so
//!     the tree has no cycles and no shared nodes.

pub mod diagnostics;
pub mod elements;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSeverity};
pub use elements::character::{Character, CharacterTable};
pub use elements::document::{Document, StoryBody, StoryType};
pub use elements::entry::{
    Choice, DiceChoice, DiceChoices, Entry, EntryKind, Modifiers, Speech,
};
pub use elements::quest::QuestBlock;
pub use elements::scene::{Scene, SceneGraph};
