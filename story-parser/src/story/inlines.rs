//! Inline emphasis
//!
//!     Story text supports two inline forms: `**strong**` and `*italic*`. Parsing runs in two
//!     passes over each text:
//!         1. The strong pass finds `**...**` spans. A span opens at `**` not preceded by `*`
//!            and closes at the nearest `**` not followed by `*`, with at least one character
//!            and no line break in between.
//!         2. The italic pass finds `*...*` spans among what is left. Both delimiters must be
//!            a lone `*` (no `*` on either side). Strong spans are opaque to this pass, so
//!            asterisks inside them are never italicized, while an italic span may contain a
//!            strong span.
//!
//!     Unmatched asterisks stay literal text. The parser produces [InlineNode]s; turning them
//!     into markup is up to the renderer.

pub mod nodes;
pub mod parser;

pub use nodes::InlineNode;
pub use parser::parse_inlines;
