//! Error types for format operations

use std::fmt;

/// Errors that can occur while detecting, parsing, validating or exporting
/// chart data.
///
/// Every parser failure is reported as a value of this type; nothing in the
/// pipeline panics past a format boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Content does not satisfy the grammar a specific parser expects
    /// (too few rows, no table found, unrecognized top-level keys, ...)
    FormatMismatch(String),
    /// Content parsed syntactically but does not satisfy the canonical
    /// data-model invariants
    InvalidShape(String),
    /// The file read, fetch or decode itself failed, independent of content
    Io(String),
    /// A hinted extension or MIME type has no registered parser
    UnsupportedExtension(String),
    /// The format exists but does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatMismatch(msg) => write!(f, "Format mismatch: {msg}"),
            FormatError::InvalidShape(msg) => write!(f, "Invalid data shape: {msg}"),
            FormatError::Io(msg) => write!(f, "IO failure: {msg}"),
            FormatError::UnsupportedExtension(ext) => {
                write!(f, "No parser registered for '{ext}'")
            }
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
