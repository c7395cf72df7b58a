//! Document elements

pub mod character;
pub mod document;
pub mod entry;
pub mod quest;
pub mod scene;
