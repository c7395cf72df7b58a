//! AST building
//!
//!     Builders turn the raw line buckets produced by [sections](crate::story::sections) into
//!     AST values. Each builder absorbs its own malformations: bad lines are skipped and
//!     reported as diagnostics, never as errors.
//!
//!     Dialogue is built separately by the [dialogue](crate::story::dialogue) module since it
//!     has its own block structure.

pub mod characters;
pub mod quest;

pub use characters::build_characters;
pub use quest::{build_quest, build_trivia};
