//! Error types for format operations

use std::path::PathBuf;

use story_parser::StoryType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The scene graph only exists for dice stories.
    #[error("JSON output requires 'Type: dice', found '{found}'")]
    ModeMismatch { found: StoryType },

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("refusing to overwrite existing file {}", .0.display())]
    OutputExists(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}
