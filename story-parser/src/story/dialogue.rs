//! Dialogue compilation
//!
//!     A dialogue buffer (the whole dialogue section of a simple story, or one scene of a dice
//!     story) is compiled in three steps:
//!         1. [splitter] cuts the buffer into blocks, each starting at a line whose trimmed
//!            form begins with `[`.
//!         2. [header] parses the bracketed header of each block and decides what the block
//!            is: narration, image, scene break, a choice attachment or a speech line.
//!         3. [compiler] turns each block into an [Entry](crate::story::ast::Entry) and
//!            appends it to an [EntrySequence]. Choice blocks do not produce entries; they
//!            attach to the last entry of the sequence.

pub mod compiler;
pub mod header;
pub mod splitter;

pub use compiler::{compile_dialogue, EntryCompiler, EntrySequence};
pub use header::{parse_header, BlockHeader, HeaderKind};
pub use splitter::{split_blocks, Block};
