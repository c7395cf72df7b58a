//! Parser options
//!
//! One parser serves both the lenient legacy behaviour and the hardened one. The switches
//! below cover every behavioural difference between the two.

/// Feature and strictness switches for [parse_document_with](super::parse_document_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recognise `[scene break]` headers
    pub scene_breaks: bool,
    /// Keep the description field of character lines
    pub character_descriptions: bool,
    /// Fail unless the first non-blank line is a `File name` header
    pub require_file_name_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scene_breaks: true,
            character_descriptions: true,
            require_file_name_header: false,
        }
    }
}

impl ParseOptions {
    /// Lenient mode: no scene breaks, no character descriptions.
    pub fn legacy() -> Self {
        Self {
            scene_breaks: false,
            character_descriptions: false,
            require_file_name_header: false,
        }
    }

    /// Defaults plus the file name header requirement.
    pub fn strict() -> Self {
        Self {
            require_file_name_header: true,
            ..Self::default()
        }
    }
}
