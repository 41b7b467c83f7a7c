//! TSV format implementation
//!
//! Tab-separated values as produced by spreadsheet copy/paste. Splitting is
//! a naive `'\t'` split — quoting is a CSV-only behavior — so tabs inside
//! cells cannot round-trip.

use crate::common::{rows_to_table, serialize_delimited};
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;

pub struct TsvFormat;

impl Format for TsvFormat {
    fn id(&self) -> FormatId {
        FormatId::Tsv
    }

    fn description(&self) -> &str {
        "Tab-separated values"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tsv"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let rows: Vec<Vec<String>> = source
            .trim()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split('\t').map(|c| c.trim().to_string()).collect())
            .collect();

        rows_to_table(&rows, false).map(ChartData::Tabular)
    }

    fn serialize(&self, data: &ChartData) -> Result<String, FormatError> {
        let table = crate::common::require_table(data, "tsv")?;
        Ok(serialize_delimited(table, '\t'))
    }
}
