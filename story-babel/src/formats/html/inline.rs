//! Emphasis nodes to markup

use story_parser::story::inlines::{parse_inlines, InlineNode};

/// `**x**` becomes `<strong>x</strong>`, `*x*` becomes `<i>x</i>`.
pub fn render_inlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_nodes(&parse_inlines(text), &mut out);
    out
}

fn push_nodes(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(text),
            InlineNode::Strong(text) => {
                out.push_str("<strong>");
                out.push_str(text);
                out.push_str("</strong>");
            }
            InlineNode::Italic(children) => {
                out.push_str("<i>");
                push_nodes(children, out);
                out.push_str("</i>");
            }
        }
    }
}
