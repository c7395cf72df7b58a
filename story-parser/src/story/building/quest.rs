//! Quest and trivia builders

use crate::story::ast::QuestBlock;
use crate::story::lexing::SourceLine;

/// First non-blank line is the title, everything after it (trimmed) the body.
/// `None` when the section is missing or blank.
pub fn build_quest(lines: &[SourceLine]) -> Option<QuestBlock> {
    let title_index = lines.iter().position(|line| !line.text.trim().is_empty())?;
    let body = lines[title_index + 1..]
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Some(QuestBlock {
        title: lines[title_index].text.trim().to_string(),
        body: body.trim().to_string(),
    })
}

/// Raw trivia text, trimmed. `None` when blank.
pub fn build_trivia(lines: &[SourceLine]) -> Option<String> {
    let text = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
