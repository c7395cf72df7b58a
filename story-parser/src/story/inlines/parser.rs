//! Two-pass emphasis parser

use super::nodes::InlineNode;

/// Intermediate item between the two passes.
#[derive(Debug, Clone, PartialEq)]
enum Item {
    Char(char),
    Strong(String),
}

impl Item {
    fn is_star(&self) -> bool {
        matches!(self, Item::Char('*'))
    }

    fn is_newline(&self) -> bool {
        matches!(self, Item::Char('\n'))
    }
}

pub fn parse_inlines(text: &str) -> Vec<InlineNode> {
    let items = strong_pass(text);
    italic_pass(&items)
}

fn strong_pass(text: &str) -> Vec<Item> {
    let chars: Vec<char> = text.chars().collect();
    let is_star = |index: usize| chars.get(index) == Some(&'*');
    let mut items = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let opens = is_star(i) && is_star(i + 1) && (i == 0 || !is_star(i - 1));
        if opens {
            let close = (i + 2..chars.len())
                .take_while(|&k| chars[k] != '\n')
                .find(|&k| k >= i + 3 && is_star(k) && is_star(k + 1) && !is_star(k + 2));
            if let Some(k) = close {
                items.push(Item::Strong(chars[i + 2..k].iter().collect()));
                i = k + 2;
                continue;
            }
        }
        items.push(Item::Char(chars[i]));
        i += 1;
    }
    items
}

fn italic_pass(items: &[Item]) -> Vec<InlineNode> {
    let lone_star = |index: usize| {
        items[index].is_star()
            && (index == 0 || !items[index - 1].is_star())
            && !items.get(index + 1).is_some_and(Item::is_star)
    };
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < items.len() {
        if lone_star(i) {
            let close = (i + 1..items.len())
                .take_while(|&j| !items[j].is_newline())
                .find(|&j| j >= i + 2 && lone_star(j));
            if let Some(j) = close {
                flush(&mut text, &mut nodes);
                let mut inner = Vec::new();
                let mut inner_text = String::new();
                for item in &items[i + 1..j] {
                    push_item(item, &mut inner_text, &mut inner);
                }
                flush(&mut inner_text, &mut inner);
                nodes.push(InlineNode::Italic(inner));
                i = j + 1;
                continue;
            }
        }
        push_item(&items[i], &mut text, &mut nodes);
        i += 1;
    }
    flush(&mut text, &mut nodes);
    nodes
}

fn push_item(item: &Item, text: &mut String, nodes: &mut Vec<InlineNode>) {
    match item {
        Item::Char(c) => text.push(*c),
        Item::Strong(content) => {
            flush(text, nodes);
            nodes.push(InlineNode::Strong(content.clone()));
        }
    }
}

fn flush(text: &mut String, nodes: &mut Vec<InlineNode>) {
    if !text.is_empty() {
        nodes.push(InlineNode::Text(std::mem::take(text)));
    }
}
