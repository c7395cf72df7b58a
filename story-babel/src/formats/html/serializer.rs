//! HTML serializer
//!
//! Fragments are built with `format!` and the page is assembled by filling the `{{key}}` slots
//! of `templates/page.html` in a single pass, so text that happens to contain `{{...}}` is never
//! expanded twice.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use story_parser::story::ast::{Character, Entry, EntryKind, QuestBlock, Speech};
use story_parser::Document;
use tracing::debug;

use super::inline::render_inlines;
use super::HtmlOptions;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

static TEMPLATE_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("valid template slot regex"));

const DICE_STAGE: &str = "            <!-- Dynamic content will be generated here -->\n";

pub fn render_page(doc: &Document, options: &HtmlOptions) -> String {
    let prefix = options.asset_prefix.as_str();
    let mut slots: HashMap<&str, String> = HashMap::new();

    slots.insert("site_name", options.site_name.clone());
    slots.insert("site_url", options.site_url.clone());
    slots.insert("asset_prefix", prefix.to_string());
    slots.insert("chapter_title", doc.chapter_title.clone());
    slots.insert("file_name", doc.output_file_name());
    slots.insert("scene", doc.scene.clone());

    if doc.is_dice() {
        slots.insert(
            "extra_head_links",
            format!(
                "\n  <link rel=\"stylesheet\" type=\"text/css\" href=\"{prefix}styles/css/cyoa-story.css\">"
            ),
        );
        slots.insert(
            "extra_scripts",
            format!("\n  <script src=\"{prefix}styles/js/cyoa-story.js\"></script>"),
        );
        slots.insert("dialogue_attrs", dice_stage_attributes(doc, options));
        slots.insert("dialogue", DICE_STAGE.to_string());
    } else {
        slots.insert("extra_head_links", String::new());
        slots.insert("extra_scripts", String::new());
        slots.insert("dialogue_attrs", String::new());
        slots.insert("dialogue", render_dialogue(doc.entries()));
    }

    slots.insert("showcase", render_showcase(doc.characters.showcase()));
    slots.insert(
        "trivia",
        doc.trivia.as_deref().map(render_trivia).unwrap_or_default(),
    );
    slots.insert(
        "quest",
        match &doc.quest {
            Some(quest) => render_quest(quest),
            None => render_placeholder_quest(prefix),
        },
    );

    fill_template(PAGE_TEMPLATE, &slots)
}

fn fill_template(template: &str, slots: &HashMap<&str, String>) -> String {
    TEMPLATE_SLOT
        .replace_all(template, |caps: &Captures| match slots.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn dice_stage_attributes(doc: &Document, options: &HtmlOptions) -> String {
    let (start, end) = match doc.scene_graph() {
        Some(graph) => (join_ids(&graph.start), join_ids(&graph.end)),
        None => (String::new(), String::new()),
    };
    format!(
        " data-story-file=\"{}\" data-start-scene=\"{start}\" data-end-sections=\"{end}\"",
        options.story_file(doc)
    )
}

/// Set iteration is already sorted.
fn join_ids<'a>(ids: impl IntoIterator<Item = &'a String>) -> String {
    ids.into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_dialogue(entries: &[Entry]) -> String {
    let mut html = String::new();
    for entry in entries {
        match render_entry(entry) {
            Some(fragment) => {
                html.push_str(&fragment);
                html.push_str("\n\n");
            }
            None => debug!(line = entry.line, "entry renders no markup"),
        }
    }
    html
}

/// Markup for one entry; `None` for placeholders.
pub fn render_entry(entry: &Entry) -> Option<String> {
    match &entry.kind {
        EntryKind::Narration { text } => Some(format!(
            "<div class=\"dialogue-simple\">\n    <p>{}</p>\n</div>",
            render_inlines(text)
        )),
        EntryKind::Image { src } => Some(format!(
            "<div class=\"dialogue-simple\">\n    <img src=\"{src}\">\n</div>"
        )),
        EntryKind::SceneBreak => Some("<hr class=\"dialogue-scene-break\">".to_string()),
        EntryKind::Speech(speech) => Some(render_speech(speech)),
        EntryKind::Placeholder => None,
    }
}

fn render_speech(speech: &Speech) -> String {
    let (container, bubble) = if speech.modifiers.right_aligned {
        ("dialogue-container-right", "speech-bubble-right")
    } else {
        ("dialogue-container", "speech-bubble")
    };
    let hidden = if speech.modifiers.hidden_face {
        " hidden-face"
    } else {
        ""
    };
    format!(
        r#"<div class="{container}">
    <div>
      <div class="character-portrait{hidden}">
        <img src="{portrait}" alt="{speaker}" onerror="this.style.display='none'">
      </div>
    </div>
    <div class="{bubble}">
      <div class="character-name">{name}</div>
      <p>{text}</p>
    </div>
</div>"#,
        portrait = speech.portrait,
        speaker = speech.speaker,
        name = speech.display_name,
        text = render_inlines(&speech.text),
    )
}

fn render_showcase<'a>(characters: impl Iterator<Item = &'a Character>) -> String {
    characters.filter_map(render_character_card).collect()
}

fn render_character_card(character: &Character) -> Option<String> {
    let full_body = character.full_body.as_deref()?;
    let name = character.name.as_str();

    let name_block = match character.profile.as_deref() {
        Some(profile) => format!("<a href=\"{profile}\">{name}</a>"),
        None => name.to_string(),
    };

    let (classes, data_attr, overlay) = match character.description.as_deref() {
        Some(description) => (
            "character-illustration clickable-character",
            format!(" data-character=\"{}\"", character.showcase_key()),
            format!(
                r#"
              <div class="character-overlay" style="display: none;">
                <div class="overlay-content">
                  <p>{}</p>
                </div>
              </div>"#,
                render_inlines(description)
            ),
        ),
        None => ("character-illustration", String::new(), String::new()),
    };

    Some(format!(
        r#"          <div class="character-card">
            <div class="{classes}"{data_attr}>
              <img src="{full_body}" alt="{name}" onerror="this.style.display='none'">{overlay}
            </div>
            <div class="character-label">{name_block}</div>
          </div>

"#
    ))
}

fn render_trivia(trivia: &str) -> String {
    format!(
        r#"      <div id="trivia-section" style="opacity: 1; transform: translateY(0); transition: opacity 0.5s ease, transform 0.5s ease;">
        <div class="card p-md-5 p-4 mb-4">
          <h4>🧠 Trivia</h4>
          <hr>
          <div class="text-justify my-4">
            {}
          </div>
        </div>
      </div>"#,
        render_inlines(trivia)
    )
}

const ACCEPT_BUTTON: &str = r##"
            <div class="text-center mt-4">
                <a href="#"><button class="btn btn-outline-secondary btn-sm">Accept quest!</button></a>
            </div>"##;

fn render_quest(quest: &QuestBlock) -> String {
    let body = render_inlines(&quest.body);
    let lower = body.to_lowercase();
    let button = if lower.contains("accept quest") || lower.contains("<button") {
        ""
    } else {
        ACCEPT_BUTTON
    };
    format!(
        r#"      <!-- quest info here -->
      <div id="quest-section" style="opacity: 1; transform: translateY(0); transition: opacity 0.5s ease, transform 0.5s ease;">
        <div class="card p-md-5 p-4 mb-4">
          <h4>🎯 {title}</h4>
          <hr>
          <div class="text-justify my-4">
            {body}{button}
          </div>
        </div>
      </div>"#,
        title = quest.title,
    )
}

/// Default quest card shown when the script has no quest. Indistinguishable from authored copy.
fn render_placeholder_quest(prefix: &str) -> String {
    format!(
        r#"      <!-- quest info here -->
      <div id="quest-section" style="opacity: 1; transform: translateY(0); transition: opacity 0.5s ease, transform 0.5s ease;">
        <div class="card p-md-5 p-4 mb-4">
          <h4>🎯 Quest: [Placeholder Quest]</h4>
          <hr>
          <div class="text-justify my-4">
            <p><strong>Objective:</strong> Complete the quest objectives.</p>
            <p><strong>Details:</strong> Quest details will be added here.</p>
            <br>
            <p><strong>Rewards (first time only):</strong></p>
            <ul>
              <li>10 <img src="{prefix}assets/coin.png" alt="coin" style="height: 1em; width: 1em; vertical-align: middle; margin-left: 0.25em;"></li>
            </ul>{ACCEPT_BUTTON}
          </div>
        </div>
      </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_parser::parse_document;
    use story_parser::story::ast::Modifiers;

    fn speech(modifiers: Modifiers) -> Entry {
        Entry::new(
            EntryKind::Speech(Speech {
                speaker: "Nora".into(),
                display_name: "Nora the Brave".into(),
                modifiers,
                portrait: "nora.png".into(),
                text: "Hello *there*".into(),
            }),
            1,
        )
    }

    #[test]
    fn test_narration_fragment() {
        let entry = Entry::new(
            EntryKind::Narration {
                text: "It was **late**.".into(),
            },
            1,
        );
        insta::assert_snapshot!(render_entry(&entry).unwrap_or_default(), @r###"
        <div class="dialogue-simple">
            <p>It was <strong>late</strong>.</p>
        </div>
        "###);
    }

    #[test]
    fn test_speech_fragment_right_hidden() {
        let entry = speech(Modifiers {
            right_aligned: true,
            hidden_face: true,
        });
        insta::assert_snapshot!(render_entry(&entry).unwrap_or_default(), @r###"
        <div class="dialogue-container-right">
            <div>
              <div class="character-portrait hidden-face">
                <img src="nora.png" alt="Nora" onerror="this.style.display='none'">
              </div>
            </div>
            <div class="speech-bubble-right">
              <div class="character-name">Nora the Brave</div>
              <p>Hello <i>there</i></p>
            </div>
        </div>
        "###);
    }

    #[test]
    fn test_speech_fragment_default() {
        let html = render_entry(&speech(Modifiers::default())).unwrap_or_default();
        assert!(html.starts_with("<div class=\"dialogue-container\">"));
        assert!(html.contains("<div class=\"character-portrait\">"));
        assert!(html.contains("<div class=\"speech-bubble\">"));
    }

    #[test]
    fn test_placeholder_renders_nothing() {
        assert_eq!(render_entry(&Entry::placeholder(1)), None);
    }

    #[test]
    fn test_dialogue_fragments_are_separated_by_blank_lines() {
        let entries = vec![
            Entry::new(EntryKind::SceneBreak, 1),
            Entry::placeholder(2),
            Entry::new(EntryKind::SceneBreak, 3),
        ];
        assert_eq!(
            render_dialogue(&entries),
            "<hr class=\"dialogue-scene-break\">\n\n<hr class=\"dialogue-scene-break\">\n\n"
        );
    }

    #[test]
    fn test_character_card_with_overlay() {
        let character = Character {
            full_body: Some("willow.png".into()),
            profile: Some("/willow".into()),
            description: Some("Very **old**".into()),
            ..Character::new("Old Willow")
        };
        let card = render_character_card(&character).unwrap_or_default();
        assert!(card.contains(
            "<div class=\"character-illustration clickable-character\" data-character=\"old-willow\">"
        ));
        assert!(card.contains("<p>Very <strong>old</strong></p>"));
        assert!(card.contains("<a href=\"/willow\">Old Willow</a>"));
    }

    #[test]
    fn test_character_without_full_body_has_no_card() {
        assert_eq!(render_character_card(&Character::new("Pip")), None);
    }

    #[test]
    fn test_quest_button_suppressed_when_body_mentions_it() {
        let with_button = render_quest(&QuestBlock {
            title: "Find it".into(),
            body: "Go <button>Accept</button>".into(),
        });
        assert!(!with_button.contains("Accept quest!"));

        let plain = render_quest(&QuestBlock {
            title: "Find it".into(),
            body: "Go".into(),
        });
        assert!(plain.contains("Accept quest!"));
        assert!(plain.contains("<h4>🎯 Find it</h4>"));
    }

    #[test]
    fn test_template_slots_are_filled_once() {
        let doc = parse_document("Chapter title: {{scene}}\nScene: Woods").expect("parse");
        let page = render_page(&doc, &HtmlOptions::default());
        assert!(page.contains("<title>Pufflings - {{scene}}</title>"));
        assert!(page.contains("Scene — Woods"));
    }
}
