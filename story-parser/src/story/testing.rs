//! Testing utilities
//!
//!     Story scripts are easy to get subtly wrong by hand, so tests across the workspace share
//!     a small set of curated sample scripts stored under `tests/fixtures/`. They are embedded
//!     at compile time and exposed through [StorySample].
//!
//!     ```rust,ignore
//!     use story_parser::story::testing::StorySample;
//!
//!     let doc = StorySample::Dice.parse();
//!     assert_eq!(doc.scenes().len(), 3);
//!     ```

use crate::story::ast::Document;
use crate::story::parsing::parse_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySample {
    /// Simple story with characters, speech, narration, quest and trivia
    Simple,
    /// Dice story with three scenes, plain and dice choices
    Dice,
    /// Malformed script exercising every diagnostic path
    Malformed,
}

impl StorySample {
    pub fn source(&self) -> &'static str {
        match self {
            StorySample::Simple => include_str!("../../tests/fixtures/simple.story"),
            StorySample::Dice => include_str!("../../tests/fixtures/dice.story"),
            StorySample::Malformed => include_str!("../../tests/fixtures/malformed.story"),
        }
    }

    /// Parse with default options. Panics on failure; only for tests.
    pub fn parse(&self) -> Document {
        match parse_document(self.source()) {
            Ok(doc) => doc,
            Err(err) => panic!("sample {self:?} failed to parse: {err}"),
        }
    }
}
