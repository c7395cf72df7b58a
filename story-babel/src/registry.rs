//! Format registry for format discovery and selection

use std::collections::HashMap;

use story_parser::Document;

use crate::error::FormatError;
use crate::format::Format;

/// Registry of output formats, keyed by name
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.serialize(&doc, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &HashMap::new())
    }

    pub fn serialize_with_options(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::json::JsonFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
