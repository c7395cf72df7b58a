//! Block header parsing
//!
//! A header is `[inner] inline`, where `inner` is everything up to the first `]` and `inline`
//! is the rest of the line. The inner text, compared case-insensitively, selects the block
//! kind:
//!
//! | inner                      | kind        |
//! |----------------------------|-------------|
//! | `narration`                | Narration   |
//! | `image`                    | Image       |
//! | `scene break`              | SceneBreak  |
//! | `choices...`               | Choices     |
//! | `speaker | display | mods` | Speaker     |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::story::parsing::ParseOptions;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\](.*)$").expect("valid header regex"));

const DEFAULT_DICE_MIN: i64 = 1;
const DEFAULT_DICE_MAX: i64 = 20;

/// Parsed bracketed header, both parts trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub inner: String,
    pub inline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderKind {
    Narration,
    Image,
    SceneBreak,
    Choices,
    DiceChoices {
        dice_min: i64,
        dice_max: i64,
    },
    Speaker {
        key: String,
        display_name: String,
        modifiers: Vec<String>,
    },
}

/// Match a header line. Leading whitespace before `[` is allowed.
pub fn parse_header(line: &str) -> Option<BlockHeader> {
    let captures = HEADER.captures(line.trim_start())?;
    Some(BlockHeader {
        inner: captures[1].trim().to_string(),
        inline: captures[2].trim().to_string(),
    })
}

impl BlockHeader {
    pub fn kind(&self, options: &ParseOptions) -> HeaderKind {
        let keyword = self.inner.to_lowercase();
        match keyword.as_str() {
            "narration" => return HeaderKind::Narration,
            "image" => return HeaderKind::Image,
            "scene break" if options.scene_breaks => return HeaderKind::SceneBreak,
            _ => {}
        }

        let fields: Vec<&str> = self.inner.split('|').map(str::trim).collect();

        if keyword.starts_with("choices") {
            let is_dice = fields
                .get(1)
                .is_some_and(|mode| mode.eq_ignore_ascii_case("dice"));
            if !is_dice {
                return HeaderKind::Choices;
            }
            return HeaderKind::DiceChoices {
                dice_min: bound(fields.get(2), DEFAULT_DICE_MIN),
                dice_max: bound(fields.get(3), DEFAULT_DICE_MAX),
            };
        }

        let key = fields[0].to_string();
        let display_name = fields
            .get(1)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .unwrap_or_else(|| key.clone());
        let modifiers = fields
            .get(2)
            .map(|mods| {
                mods.split(',')
                    .map(|token| token.trim().to_lowercase())
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        HeaderKind::Speaker {
            key,
            display_name,
            modifiers,
        }
    }
}

/// Absent or non-numeric bounds fall back to the default.
fn bound(field: Option<&&str>, default: i64) -> i64 {
    field
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind(line: &str) -> HeaderKind {
        parse_header(line)
            .expect("header")
            .kind(&ParseOptions::default())
    }

    #[test]
    fn test_parse_header_parts() {
        let header = parse_header("  [ Nora | Nora the Brave ]  Hello there!  ").expect("header");
        assert_eq!(header.inner, "Nora | Nora the Brave");
        assert_eq!(header.inline, "Hello there!");
    }

    #[rstest]
    #[case("[]")]
    #[case("[unclosed")]
    #[case("no bracket")]
    fn test_malformed_headers(#[case] line: &str) {
        assert_eq!(parse_header(line), None);
    }

    #[test]
    fn test_only_first_bracket_pair_is_the_header() {
        let header = parse_header("[narration] see [note]").expect("header");
        assert_eq!(header.inner, "narration");
        assert_eq!(header.inline, "see [note]");
    }

    #[rstest]
    #[case("[Narration]", HeaderKind::Narration)]
    #[case("[ IMAGE ]", HeaderKind::Image)]
    #[case("[Scene Break]", HeaderKind::SceneBreak)]
    #[case("[choices]", HeaderKind::Choices)]
    #[case("[Choices | plain]", HeaderKind::Choices)]
    #[case("[choices | dice | 1 | 20]", HeaderKind::DiceChoices { dice_min: 1, dice_max: 20 })]
    #[case("[choices | DICE | 2 | 12]", HeaderKind::DiceChoices { dice_min: 2, dice_max: 12 })]
    #[case("[choices | dice]", HeaderKind::DiceChoices { dice_min: 1, dice_max: 20 })]
    #[case("[choices | dice | x | 6]", HeaderKind::DiceChoices { dice_min: 1, dice_max: 6 })]
    fn test_keywords(#[case] line: &str, #[case] expected: HeaderKind) {
        assert_eq!(kind(line), expected);
    }

    #[test]
    fn test_speaker_defaults_display_name() {
        assert_eq!(
            kind("[Nora | | Right, HIDDEN ]"),
            HeaderKind::Speaker {
                key: "Nora".into(),
                display_name: "Nora".into(),
                modifiers: vec!["right".into(), "hidden".into()],
            }
        );
    }

    #[test]
    fn test_speaker_with_display_name() {
        assert_eq!(
            kind("[Pip | Little Pip]"),
            HeaderKind::Speaker {
                key: "Pip".into(),
                display_name: "Little Pip".into(),
                modifiers: vec![],
            }
        );
    }

    #[test]
    fn test_scene_break_is_a_speaker_in_legacy_mode() {
        let header = parse_header("[scene break]").expect("header");
        assert!(matches!(
            header.kind(&ParseOptions::legacy()),
            HeaderKind::Speaker { .. }
        ));
    }
}
