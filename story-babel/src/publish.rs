//! Serialize a document and either return the text or write it to a file

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use story_parser::Document;
use tracing::info;

use crate::error::FormatError;
use crate::registry::FormatRegistry;

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub document: &'a Document,
    pub format: &'a str,
    pub output: Option<PathBuf>,
    pub options: HashMap<String, String>,
    /// Replace an existing output file instead of failing
    pub overwrite: bool,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
            overwrite: false,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Serialize first, then write. A serialization failure never touches the disk.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;

    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(path, text, spec.overwrite)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

fn write_to_path(path: PathBuf, text: String, overwrite: bool) -> Result<PathBuf, FormatError> {
    if path.exists() && !overwrite {
        return Err(FormatError::OutputExists(path));
    }
    let io_error = |source| FormatError::Io {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&path, text).map_err(io_error)?;
    info!(path = %path.display(), "wrote output");
    Ok(path)
}
