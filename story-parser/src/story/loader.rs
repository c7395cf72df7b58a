//! Document loading utilities
//!
//! `DocumentLoader` reads a story script from a file or a string and parses it. The CLI and
//! the tests both go through it.
//!
//! # Example
//!
//! ```rust,ignore
//! use story_parser::story::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("chapter1.txt")?.parse()?;
//! let doc = DocumentLoader::from_string("File name: ch1\n").parse()?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::story::ast::Document;
use crate::story::parsing::{parse_document_with, ParseError, ParseOptions};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct DocumentLoader {
    source: String,
    path: Option<PathBuf>,
    options: ParseOptions,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader {
            source,
            path: Some(path.to_path_buf()),
            options: ParseOptions::default(),
        })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            path: None,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(&self) -> Result<Document, LoaderError> {
        Ok(parse_document_with(&self.source, &self.options)?)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// File stem of the source path, used to name derived outputs.
    pub fn source_stem(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("tempfile");
        write!(file, "File name: ch1\r\nDialogue:\r\n[narration] Hi").expect("write");

        let loader = DocumentLoader::from_path(file.path()).expect("load");
        let doc = loader.parse().expect("parse");
        assert_eq!(doc.output_file_name(), "ch1.html");
        assert_eq!(doc.entries().len(), 1);
        assert!(loader.source_stem().is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentLoader::from_path("/definitely/not/here.txt")
            .err()
            .expect("error");
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_strict_options() {
        let err = DocumentLoader::from_string("Dialogue:")
            .with_options(ParseOptions::strict())
            .parse()
            .err()
            .expect("error");
        assert!(matches!(err, LoaderError::Parse(_)));
    }
}
