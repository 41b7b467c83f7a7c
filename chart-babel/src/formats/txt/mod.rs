//! Plain-text format with delimiter sniffing
//!
//! The `.txt` upload path: the delimiter is unknown, so it is sniffed from
//! the header line (see [`crate::detect::sniff_delimiter`]) and applied to
//! every row. Data rows whose label cell is empty are skipped; rows that do
//! not honor the sniffed delimiter simply produce padded/zeroed columns
//! rather than failing.

use crate::common::rows_to_table;
use crate::detect::sniff_delimiter;
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;

pub struct TxtFormat;

impl Format for TxtFormat {
    fn id(&self) -> FormatId {
        FormatId::Txt
    }

    fn description(&self) -> &str {
        "Plain text with auto-detected delimiter"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let lines: Vec<&str> = source.trim().lines().collect();
        if lines.len() < 2 {
            return Err(FormatError::FormatMismatch(
                "input must have at least a header row and one data row".to_string(),
            ));
        }

        let delimiter = sniff_delimiter(lines[0]);
        let mut rows = vec![delimiter.split(lines[0])];
        for line in &lines[1..] {
            let cells = delimiter.split(line);
            if !cells.is_empty() && !cells[0].is_empty() {
                rows.push(cells);
            }
        }

        rows_to_table(&rows, false).map(ChartData::Tabular)
    }
}
