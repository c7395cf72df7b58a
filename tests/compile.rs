use rstest::rstest;
use storyscript::{compile_to_graph, compile_to_markup, CompileError, FormatError, StoryType};

const SIMPLE: &str = "File name: ch1.txt\n\
Chapter title: Dawn\n\
Characters:\n\
Nora | - | nora.png | Sprout\n\
Dialogue:\n\
[narration] The sun rose.\n\
[Nora] Good **morning**!\n";

const DICE: &str = "File name: crossroads\n\
Type: dice\n\
Dialogue | Intro | start\n\
[narration] A fork in the road.\n\
[choices | dice | 1 | 6]\n\
1-3 | Left\n\
4-6 | Right\n\
Dialogue | Left | end\n\
[narration] You went left.\n\
Dialogue | Right | end\n\
[narration] You went right.\n";

#[test]
fn markup_renders_simple_story() {
    let html = compile_to_markup(SIMPLE).expect("markup");
    assert!(html.contains("Dawn"));
    assert!(html.contains("The sun rose."));
    assert!(html.contains("<strong>morning</strong>"));
    assert!(html.contains("nora.png"));
}

#[test]
fn markup_is_deterministic() {
    assert_eq!(
        compile_to_markup(SIMPLE).expect("first"),
        compile_to_markup(SIMPLE).expect("second")
    );
}

#[test]
fn graph_renders_dice_story() {
    let json = compile_to_graph(DICE).expect("graph");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["scenes"][0]["scene"], "Intro");
    assert_eq!(value["scenes"][1]["final"], true);
    assert!(json.contains("\"dice-max\": 6"));
    assert!(json.contains("\"next\": \"Right\""));
}

#[rstest]
#[case(SIMPLE)]
#[case("File name: x\nDialogue:\n[narration] hi\n")]
#[case("")]
fn graph_requires_dice_type(#[case] source: &str) {
    let err = compile_to_graph(source).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Format(FormatError::ModeMismatch {
            found: StoryType::Simple
        })
    ));
}

#[test]
fn markup_accepts_empty_input() {
    assert!(compile_to_markup("").is_ok());
}
