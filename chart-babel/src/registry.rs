//! Format registry for discovery and dispatch
//!
//! This module provides a centralized registry for all available formats,
//! keyed by [`FormatId`]. Parse and export requests go through the registry,
//! which makes the "every declared format has a registered parser" property
//! a checkable fact instead of a convention.

use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;
use std::collections::HashMap;

/// Registry of chart-data formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let data = registry.parse("x,y\n1,2", FormatId::Csv)?;
/// let text = registry.serialize(&data, FormatId::Markdown)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<FormatId, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same id already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats.insert(format.id(), Box::new(format));
    }

    /// Get a format by id
    pub fn get(&self, id: FormatId) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(&id)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::UnsupportedExtension(id.name().to_string()))
    }

    /// Check if a format is registered
    pub fn has(&self, id: FormatId) -> bool {
        self.formats.contains_key(&id)
    }

    /// List all registered format names (sorted)
    pub fn list_formats(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.formats.keys().map(|id| id.name()).collect();
        names.sort_unstable();
        names
    }

    /// Detect format from a filename's extension
    ///
    /// Returns the format id if a registered format claims the extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<FormatId> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;
        let ext = extension.to_ascii_lowercase();

        self.formats
            .values()
            .find(|f| f.file_extensions().contains(&ext.as_str()))
            .map(|f| f.id())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, id: FormatId) -> Result<ChartData, FormatError> {
        let fmt = self.get(id)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "format '{id}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize chart data using the specified format
    pub fn serialize(&self, data: &ChartData, id: FormatId) -> Result<String, FormatError> {
        let fmt = self.get(id)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "format '{id}' does not support serialization"
            )));
        }
        fmt.serialize(data)
    }

    /// Create a registry with every built-in format registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::csv::CsvFormat);
        registry.register(crate::formats::tsv::TsvFormat);
        registry.register(crate::formats::txt::TxtFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::xml::XmlFormat);
        registry.register(crate::formats::yaml::YamlFormat);
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::sql::SqlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
