//! Main module for story script functionality

pub mod ast;
pub mod building;
pub mod dialogue;
pub mod inlines;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod sections;
pub mod testing;
