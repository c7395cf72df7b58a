//! # story-parser
//!
//! A parser for the story script format.
//!
//! A story script is a loosely structured text file: a few `Key: value` fields, then sections
//! introduced by sentinel header lines (`Characters:`, `Dialogue:`, `Quest:`, `Trivia:`). The
//! dialogue section is a sequence of entries, each anchored by a bracketed header such as
//! `[narration]` or `[Nora | Nora the Brave | right]`. Dice stories split their dialogue into
//! named scenes (`Dialogue | <scene> | start`) connected by choice blocks.
//!
//! File Layout
//!
//! src/story
//!   ├── lexing       Source normalization and per-line classification
//!   ├── sections     Grouping classified lines into section buckets
//!   ├── building     Character table, quest and trivia builders
//!   ├── dialogue     Block splitting and entry compilation
//!   ├── inlines      `**strong**` / `*italic*` emphasis parsing
//!   ├── parsing      The orchestrating `parse_document` entry point and its options
//!   └── ast          The resulting `Document` and its elements
//!
//! Data flows strictly in that order: raw text, classified lines, section buckets, per-section
//! structured data, compiled entries, `Document`. Rendering lives in the story-babel crate.

pub mod story;

pub use story::ast::{Document, StoryType};
pub use story::parsing::{parse_document, parse_document_with, ParseError, ParseOptions};
