//! Full page rendering against the sample scripts

use std::collections::HashMap;

use story_babel::{Format, FormatRegistry, HtmlFormat, HtmlOptions};
use story_parser::story::testing::StorySample;

fn render(sample: StorySample) -> String {
    HtmlFormat::default()
        .serialize(&sample.parse())
        .expect("html")
}

#[test]
fn test_simple_page_chrome() {
    let page = render(StorySample::Simple);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Pufflings - The Lost Acorn</title>"));
    assert!(page.contains("<a href=\"chapter-one.html\">The Lost Acorn</a>"));
    assert!(page.contains("<h6><i>Scene — Riverbank</i></h6>"));
    assert!(page.contains("href=\"../styles/css/charadex.css\""));
    assert!(page.contains("<div id=\"dialogue-stage\" style=\"position: relative;\">"));
    assert!(!page.contains("cyoa-story"));
    assert!(!page.contains("{{"));
}

#[test]
fn test_simple_page_dialogue_order() {
    let page = render(StorySample::Simple);

    let narration = page.find("The river was <strong>loud</strong>").expect("narration");
    let nora = page.find("<div class=\"dialogue-container-right\">").expect("Nora");
    let pip = page.find("<div class=\"character-name\">Little Pip</div>").expect("Pip");
    let image = page.find("<img src=\"images/river.png\">").expect("image");
    let scene_break = page.find("<hr class=\"dialogue-scene-break\">").expect("break");
    assert!(narration < nora && nora < pip && pip < image && image < scene_break);

    assert!(page.contains("<p>Have you seen my acorn?\n\nIt was <i>right here</i>.</p>"));
    assert!(page.contains("<div class=\"character-portrait hidden-face\">"));
    assert!(page.contains("<img src=\"nora_portrait.png\" alt=\"Nora\""));
    assert!(page.contains("<img src=\"\" alt=\"Old Willow\""));
}

#[test]
fn test_simple_page_showcase() {
    let page = render(StorySample::Simple);

    assert_eq!(page.matches("<div class=\"character-card\">").count(), 2);
    assert!(page.contains(
        "<div class=\"character-illustration clickable-character\" data-character=\"nora\">"
    ));
    assert!(page.contains("<a href=\"https://pufflings.example/nora\">Nora</a>"));
    assert!(page.contains(
        "<p>A <i>curious</i> puffling who collects <strong>shiny</strong> things</p>"
    ));
    assert!(page.contains("<div class=\"character-label\">Old Willow</div>"));

    let nora = page.find("data-character=\"nora\"").expect("Nora card");
    let willow = page.find("<img src=\"willow_full.png\"").expect("Willow card");
    assert!(nora < willow);
}

#[test]
fn test_simple_page_trivia_and_quest() {
    let page = render(StorySample::Simple);

    assert!(page.contains("<h4>🧠 Trivia</h4>"));
    assert!(page.contains("Pufflings can hold their breath for <strong>ten</strong> minutes."));
    assert!(page.contains("<h4>🎯 Find the Acorn</h4>"));
    assert!(page.contains("Search the riverbank and bring it back."));
    assert!(page.contains("Accept quest!"));
    assert!(!page.contains("[Placeholder Quest]"));
}

#[test]
fn test_dice_page_stage() {
    let page = render(StorySample::Dice);

    assert!(page.contains(
        "<div id=\"dialogue-stage\" data-story-file=\"prompts/CYOA/forest-path.json\" data-start-scene=\"Intro\" data-end-sections=\"Home\" style=\"position: relative;\">"
    ));
    assert!(page.contains("<!-- Dynamic content will be generated here -->"));
    assert!(page.contains("<link rel=\"stylesheet\" type=\"text/css\" href=\"../styles/css/cyoa-story.css\">"));
    assert!(page.contains("<script src=\"../styles/js/cyoa-story.js\"></script>"));
    assert!(!page.contains("dialogue-simple"));
    assert!(!page.contains("trivia-section"));
    assert!(page.contains("[Placeholder Quest]"));
}

#[test]
fn test_dice_page_start_and_end_sets_are_sorted() {
    let doc = story_parser::parse_document(
        "Type: dice\nDialogue | Zed | start\nDialogue | Alpha | start\nDialogue | Omega | end\nDialogue | Beta | end",
    )
    .expect("parse");
    let page = HtmlFormat::default().serialize(&doc).expect("html");
    assert!(page.contains("data-start-scene=\"Alpha, Zed\" data-end-sections=\"Beta, Omega\""));
}

#[test]
fn test_options_through_registry() {
    let options = HashMap::from([
        ("story-stem".to_string(), "input-name".to_string()),
        ("asset-prefix".to_string(), "/".to_string()),
        ("site-name".to_string(), "Acorns".to_string()),
    ]);
    let page = FormatRegistry::default()
        .serialize_with_options(&StorySample::Dice.parse(), "html", &options)
        .expect("html");

    assert!(page.contains("data-story-file=\"prompts/CYOA/input-name.json\""));
    assert!(page.contains("<script src=\"/styles/js/cyoa-story.js\"></script>"));
    assert!(page.contains("<title>Acorns - The Forest Path</title>"));
}

#[test]
fn test_custom_options() {
    let format = HtmlFormat::new(HtmlOptions {
        story_json_dir: "stories/".into(),
        ..HtmlOptions::default()
    });
    let page = format.serialize(&StorySample::Dice.parse()).expect("html");
    assert!(page.contains("data-story-file=\"stories/forest-path.json\""));
}

#[test]
fn test_rendering_is_deterministic() {
    for sample in [StorySample::Simple, StorySample::Dice, StorySample::Malformed] {
        assert_eq!(render(sample), render(sample));
    }
}
