//! Format trait definition

use std::collections::HashMap;

use story_parser::Document;

use crate::error::FormatError;

/// Trait for output formats
///
/// Formats are serialization-only: story scripts are the single source format.
///
/// # Examples
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(doc.chapter_title.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Extension of files written in this format, without the dot
    fn file_extension(&self) -> &str {
        self.name()
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize a Document into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with string options (`key -> value`). Formats without options ignore them.
    fn serialize_with_options(
        &self,
        doc: &Document,
        _options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(doc)
    }
}
