//! Inline nodes

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Strong(String),
    Italic(Vec<InlineNode>),
}
