//! Format implementations

pub mod html;
pub mod json;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
