//! Output formats for story documents
//!
//!     This crate turns a parsed story [Document](story_parser::Document) into the artifacts the
//!     site consumes: a full HTML page and, for dice stories, a JSON scene graph read by the
//!     choose-your-own-adventure runtime.
//!
//! Architecture
//!
//!     - Format trait: uniform serialization interface for all outputs
//!     - FormatRegistry: lookup of formats by name
//!     - Format implementations: `html` and `json`
//!     - publish: serialize and either return the text or write it to disk
//!
//!     This is a pure lib: it powers story-cli but assumes no shell. Nothing here prints, reads
//!     environment variables or asks questions.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # write-or-return helper used by the CLI
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── inline.rs       # emphasis nodes to markup
//!     │   │   ├── serializer.rs   # fragments and page assembly
//!     │   │   ├── templates/page.html
//!     │   │   └── mod.rs
//!     │   └── json
//!     │       ├── serializer.rs   # serde records for the scene graph
//!     │       └── mod.rs
//!     └── lib.rs

pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{HtmlFormat, HtmlOptions};
pub use formats::json::JsonFormat;
pub use registry::FormatRegistry;
