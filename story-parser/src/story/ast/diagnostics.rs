//! Diagnostics collected while parsing
//!
//! Story scripts are hand-written and frequently slightly malformed. The parser absorbs every
//! local malformation (skips the offending line or block and keeps going) and records a
//! [Diagnostic] for it on the [Document](super::Document). Nothing recorded here is fatal.
//!
//! ## Codes
//!
//! - `malformed-header`: a dialogue block header that is not `[...]`
//! - `missing-required-field`: a character line with fewer than three fields
//! - `unterminated-input`: dialogue content before the first bracketed header
//! - `invalid-choice-line`: a choice line without `|`, or a dice line without a valid range
//! - `unknown-modifier`: a speech modifier matching neither `right` nor `hidden`
//! - `untagged-dialogue`: a dice story dialogue line read outside any scene

use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Warning,
    Information,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    MalformedHeader,
    MissingRequiredField,
    UnterminatedInput,
    InvalidChoiceLine,
    UnknownModifier,
    UntaggedDialogue,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::MalformedHeader => "malformed-header",
            DiagnosticCode::MissingRequiredField => "missing-required-field",
            DiagnosticCode::UnterminatedInput => "unterminated-input",
            DiagnosticCode::InvalidChoiceLine => "invalid-choice-line",
            DiagnosticCode::UnknownModifier => "unknown-modifier",
            DiagnosticCode::UntaggedDialogue => "untagged-dialogue",
        }
    }

    /// Unknown modifiers are lint-level; everything else drops input.
    pub fn default_severity(&self) -> DiagnosticSeverity {
        match self {
            DiagnosticCode::UnknownModifier => DiagnosticSeverity::Information,
            _ => DiagnosticSeverity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One absorbed malformation. `line` is 1-based in the normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub severity: DiagnosticSeverity,
    pub code: DiagnosticCode,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: code.default_severity(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} at line {}",
            self.severity, self.code, self.message, self.line
        )
    }
}
