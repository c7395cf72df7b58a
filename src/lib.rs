//! # storyscript
//!
//! Compiles story scripts into chapter pages and choose-your-own-adventure
//! scene graphs.
//!
//! The two entry points below are pure: text in, text out, default options.
//! Callers that need file output, configuration or diagnostics use the member
//! crates directly:
//!
//!     story-parser   line classifier, sections, characters, dialogue compiler
//!     story-babel    HTML and JSON formats, publishing
//!     story-config   layered TOML configuration
//!     story-cli      the `story` binary

use thiserror::Error;

pub use story_babel::FormatError;
pub use story_parser::{Document, ParseError, ParseOptions, StoryType};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn compile(raw_text: &str, format: &str) -> Result<String, CompileError> {
    let doc = story_parser::parse_document(raw_text)?;
    let registry = story_babel::FormatRegistry::with_defaults();
    Ok(registry.serialize(&doc, format)?)
}

/// Render a story script as a complete HTML page.
pub fn compile_to_markup(raw_text: &str) -> Result<String, CompileError> {
    compile(raw_text, "html")
}

/// Render a dice story as its JSON scene graph.
///
/// Fails with [`FormatError::ModeMismatch`] unless the script declares `Type: dice`.
pub fn compile_to_graph(raw_text: &str) -> Result<String, CompileError> {
    compile(raw_text, "json")
}
