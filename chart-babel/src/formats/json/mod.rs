//! JSON format implementation
//!
//! JSON is the only input format that can carry all four canonical shapes.
//! Parsing is two-stage: `serde_json` handles the syntax, then the validator
//! decides which shape the value is (and produces the structured shape
//! errors). Export pretty-prints with 2-space indentation, the untagged wire
//! form matching what the parser accepts.

use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;
use crate::validate;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn id(&self) -> FormatId {
        FormatId::Json
    }

    fn description(&self) -> &str {
        "JSON chart data (all four canonical shapes)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| FormatError::FormatMismatch(format!("JSON syntax error: {e}")))?;
        validate::from_value(&value)
    }

    fn serialize(&self, data: &ChartData) -> Result<String, FormatError> {
        serde_json::to_string_pretty(data)
            .map_err(|e| FormatError::InvalidShape(format!("JSON serialization error: {e}")))
    }
}
