//! Dialogue block splitter

use tracing::debug;

use crate::story::ast::{Diagnostic, DiagnosticCode};
use crate::story::lexing::SourceLine;

/// A header line and the lines that follow it, up to the next header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: SourceLine,
    pub body: Vec<SourceLine>,
}

fn is_header(line: &SourceLine) -> bool {
    line.text.trim_start().starts_with('[')
}

/// Split a dialogue buffer into blocks. Blank lines stay inside the block they follow.
///
/// Content before the first header cannot be attributed to any entry and is dropped; a
/// single `unterminated-input` diagnostic marks it when it is not blank.
pub fn split_blocks(lines: &[SourceLine], diagnostics: &mut Vec<Diagnostic>) -> Vec<Block> {
    let first_header = lines.iter().position(is_header).unwrap_or(lines.len());

    if let Some(orphan) = lines[..first_header]
        .iter()
        .find(|line| !line.text.trim().is_empty())
    {
        debug!(line = orphan.number, "dropping dialogue before first header");
        diagnostics.push(Diagnostic::new(
            orphan.number,
            DiagnosticCode::UnterminatedInput,
            "dialogue content before the first [header] is ignored",
        ));
    }

    let mut blocks: Vec<Block> = Vec::new();
    for line in &lines[first_header..] {
        if is_header(line) {
            blocks.push(Block {
                header: line.clone(),
                body: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.body.push(line.clone());
        }
    }
    blocks
}
