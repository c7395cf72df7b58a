//! Character table builder
//!
//! `Name | FullBody | Portrait | Profile | Description`, pipe-delimited, trailing fields
//! optional. `-` or an empty field means absent.

use tracing::debug;

use crate::story::ast::{Character, CharacterTable, Diagnostic, DiagnosticCode};
use crate::story::lexing::SourceLine;
use crate::story::parsing::ParseOptions;

const MIN_FIELDS: usize = 3;

pub fn build_characters(
    lines: &[SourceLine],
    options: &ParseOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> CharacterTable {
    let mut table = CharacterTable::new();

    for line in lines.iter().filter(|line| !line.text.trim().is_empty()) {
        let fields: Vec<&str> = line.text.split('|').map(str::trim).collect();
        if fields.len() < MIN_FIELDS || fields[0].is_empty() {
            debug!(line = line.number, "skipping character line");
            diagnostics.push(Diagnostic::new(
                line.number,
                DiagnosticCode::MissingRequiredField,
                format!(
                    "character line needs a name, full body and portrait field: '{}'",
                    line.text.trim()
                ),
            ));
            continue;
        }

        let description = if options.character_descriptions {
            field(&fields, 4)
        } else {
            None
        };

        table.insert(Character {
            name: fields[0].to_string(),
            full_body: field(&fields, 1),
            portrait: field(&fields, 2),
            profile: field(&fields, 3),
            description,
        });
    }

    table
}

fn field(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .filter(|value| !value.is_empty() && **value != "-")
        .map(|value| value.to_string())
}
