//! Lexer
//!
//!     Story scripts are line oriented, so lexing is two small steps:
//!         1. Normalization. A leading byte-order mark is stripped and the three line ending
//!            forms (`\r\n`, `\r`, `\n`) collapse to `\n`. See [normalize].
//!         2. Line classification. Each line is tagged as a top-level field, a section header,
//!            a scene-tagged dialogue header or plain content. See
//!            [line_classification](line_classification).
//!
//!     Classification is stateless: what a line means never depends on the lines before it.
//!     Deciding where content goes is the job of the [sections](crate::story::sections)
//!     accumulator, which holds the state.

pub mod line_classification;

pub use line_classification::{classify_line, FieldKey, LineType, Phase, Section};

const BOM: char = '\u{feff}';

/// One line of normalized input. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Strip a leading BOM and normalize line endings to `\n`.
pub fn normalize(source: &str) -> String {
    let source = source.strip_prefix(BOM).unwrap_or(source);
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Normalize and split into numbered lines. Lines keep their surrounding whitespace.
pub fn split_lines(source: &str) -> Vec<SourceLine> {
    normalize(source)
        .split('\n')
        .enumerate()
        .map(|(index, text)| SourceLine {
            number: index + 1,
            text: text.to_string(),
        })
        .collect()
}
