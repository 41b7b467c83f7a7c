//! Format trait and format identifiers
//!
//! Every supported grammar implements [`Format`], a uniform interface for
//! parsing raw text into canonical chart data and serializing it back.
//! Formats can support parsing, serialization, or both.

use crate::error::FormatError;
use crate::model::ChartData;

/// Identifier for every supported format.
///
/// Dispatch goes through an explicit registry keyed by this enum rather than
/// ad-hoc extension comparisons, so coverage is checkable: see
/// `FormatRegistry::with_defaults` and its tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    Csv,
    Tsv,
    /// Plain text with a sniffed delimiter
    Txt,
    Json,
    Xml,
    Yaml,
    Markdown,
    Html,
    /// ASCII / SQL client result tables
    Sql,
}

impl FormatId {
    /// Every declared format, in registration order.
    pub const ALL: [FormatId; 9] = [
        FormatId::Csv,
        FormatId::Tsv,
        FormatId::Txt,
        FormatId::Json,
        FormatId::Xml,
        FormatId::Yaml,
        FormatId::Markdown,
        FormatId::Html,
        FormatId::Sql,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            FormatId::Csv => "csv",
            FormatId::Tsv => "tsv",
            FormatId::Txt => "txt",
            FormatId::Json => "json",
            FormatId::Xml => "xml",
            FormatId::Yaml => "yaml",
            FormatId::Markdown => "markdown",
            FormatId::Html => "html",
            FormatId::Sql => "sql",
        }
    }

    /// Look up a format by its canonical name.
    pub fn from_name(name: &str) -> Option<FormatId> {
        FormatId::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Map a caller-supplied hint (file extension or MIME type) to a format.
    ///
    /// Case-insensitive; a leading dot on extensions is tolerated.
    pub fn from_hint(hint: &str) -> Option<FormatId> {
        let hint = hint.trim().trim_start_matches('.').to_ascii_lowercase();
        match hint.as_str() {
            "csv" | "text/csv" => Some(FormatId::Csv),
            "tsv" | "text/tab-separated-values" => Some(FormatId::Tsv),
            "txt" | "text/plain" => Some(FormatId::Txt),
            "json" | "application/json" | "text/json" => Some(FormatId::Json),
            "xml" | "application/xml" | "text/xml" => Some(FormatId::Xml),
            "yaml" | "yml" | "application/yaml" | "text/yaml" => Some(FormatId::Yaml),
            "md" | "markdown" | "text/markdown" => Some(FormatId::Markdown),
            "html" | "htm" | "text/html" => Some(FormatId::Html),
            "sql" => Some(FormatId::Sql),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for chart-data formats
///
/// Implementors provide conversion between raw text and the canonical data
/// model. Parsers are pure and stateless: any internal failure is caught and
/// converted into a [`FormatError`], nothing escapes the boundary.
pub trait Format: Send + Sync {
    /// The identifier this implementation is registered under.
    fn id(&self) -> FormatId;

    /// The name of this format (e.g., "csv", "markdown")
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (text → chart data)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (chart data → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse raw text into canonical chart data.
    ///
    /// Default implementation returns NotSupported; parsing formats override.
    fn parse(&self, _source: &str) -> Result<ChartData, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize canonical chart data into text.
    ///
    /// Default implementation returns NotSupported; exporting formats
    /// override. Only tabular data has textual exporters.
    fn serialize(&self, _data: &ChartData) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support serialization",
            self.name()
        )))
    }
}
