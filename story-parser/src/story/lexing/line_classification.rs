//! Line Classification
//!
//! Rules are checked in order against the trimmed line:
//!     1. `File name:`, `Chapter title:`, `Scene:` and `Type:` prefixes are top-level fields.
//!     2. `Characters:`, `Dialogue:`, `Quest:` and `Trivia:` (exact) are section headers.
//!     3. `Dialogue | <scene> | <phase>` is a scene-tagged dialogue header.
//!     4. Everything else is content.
//!
//! Field prefixes and section tokens are case-sensitive. The scene-tagged header is matched
//! case-insensitively on its first field.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    FileName,
    ChapterTitle,
    Scene,
    Type,
}

impl FieldKey {
    const ALL: [FieldKey; 4] = [
        FieldKey::FileName,
        FieldKey::ChapterTitle,
        FieldKey::Scene,
        FieldKey::Type,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            FieldKey::FileName => "File name:",
            FieldKey::ChapterTitle => "Chapter title:",
            FieldKey::Scene => "Scene:",
            FieldKey::Type => "Type:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Characters,
    Dialogue,
    Quest,
    Trivia,
}

impl Section {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "Characters:" => Some(Section::Characters),
            "Dialogue:" => Some(Section::Dialogue),
            "Quest:" => Some(Section::Quest),
            "Trivia:" => Some(Section::Trivia),
            _ => None,
        }
    }
}

/// Phase flag of a scene-tagged dialogue header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    /// Top-level `Key: value`; the value is trimmed.
    Field(FieldKey, String),
    SectionHeader(Section),
    /// `Dialogue | scene | phase`. `scene` is `None` when the field is missing or empty.
    SceneHeader {
        scene: Option<String>,
        phase: Option<Phase>,
    },
    Content,
}

pub fn classify_line(line: &str) -> LineType {
    let trimmed = line.trim();

    for key in FieldKey::ALL {
        if let Some(value) = trimmed.strip_prefix(key.prefix()) {
            return LineType::Field(key, value.trim().to_string());
        }
    }

    if let Some(section) = Section::from_token(trimmed) {
        return LineType::SectionHeader(section);
    }

    if let Some(header) = classify_scene_header(trimmed) {
        return header;
    }

    LineType::Content
}

fn classify_scene_header(trimmed: &str) -> Option<LineType> {
    if !trimmed.to_lowercase().starts_with("dialogue") || !trimmed.contains('|') {
        return None;
    }

    let parts: Vec<&str> = trimmed.split('|').map(str::trim).collect();
    if parts[0].to_lowercase().trim_end_matches(':') != "dialogue" {
        return None;
    }

    let scene = parts
        .get(1)
        .map(|scene| scene.trim_end_matches(':'))
        .filter(|scene| !scene.is_empty())
        .map(str::to_string);
    let phase = parts
        .get(2)
        .and_then(|phase| match phase.to_lowercase().trim_end_matches(':') {
            "start" => Some(Phase::Start),
            "end" => Some(Phase::End),
            _ => None,
        });

    Some(LineType::SceneHeader { scene, phase })
}
