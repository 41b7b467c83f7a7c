//! CSV format implementation
//!
//! Parsing goes through the `csv` crate (RFC 4180): quoted fields suspend
//! delimiter splitting until the closing quote, which is a CSV-only behavior
//! in this pipeline — TSV deliberately does a naive split. The reader is
//! flexible about ragged rows; normalization pads them afterwards.
//!
//! Serialization is a plain join. Labels containing commas or quotes are a
//! documented round-trip limitation, not escaped.

use crate::common::{rows_to_table, serialize_delimited};
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;

pub struct CsvFormat;

impl Format for CsvFormat {
    fn id(&self) -> FormatId {
        FormatId::Csv
    }

    fn description(&self) -> &str {
        "Comma-separated values"
    }

    fn file_extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source.trim().as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| FormatError::FormatMismatch(format!("CSV parsing error: {e}")))?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if cells.iter().all(|c| c.is_empty()) {
                continue;
            }
            rows.push(cells);
        }

        rows_to_table(&rows, false).map(ChartData::Tabular)
    }

    fn serialize(&self, data: &ChartData) -> Result<String, FormatError> {
        let table = crate::common::require_table(data, "csv")?;
        Ok(serialize_delimited(table, ','))
    }
}
