//! SQL / ASCII result-table implementation
//!
//! Handles the tables SQL clients print: either tab-separated or aligned
//! with runs of spaces, often framed by box-drawing rows like
//! `+------+------+`. Box rows are skipped wherever they appear; pipe
//! borders are trimmed off the cells they end up glued to.

use crate::common::{is_box_separator, rows_to_table};
use crate::detect::Delimiter;
use crate::error::FormatError;
use crate::format::{Format, FormatId};
use crate::model::ChartData;

pub struct SqlFormat;

impl Format for SqlFormat {
    fn id(&self) -> FormatId {
        FormatId::Sql
    }

    fn description(&self) -> &str {
        "SQL client / ASCII result table"
    }

    fn file_extensions(&self) -> &[&str] {
        &["sql"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<ChartData, FormatError> {
        let lines: Vec<&str> = source
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !is_box_separator(l))
            .collect();

        if lines.len() < 2 {
            return Err(FormatError::FormatMismatch(
                "result must have at least a header row and one data row".to_string(),
            ));
        }

        let delimiter = if lines[0].contains('\t') {
            Delimiter::Tab
        } else {
            Delimiter::Spaces
        };

        let rows: Vec<Vec<String>> = lines
            .iter()
            .map(|line| {
                let mut cells = delimiter.split(line);
                for cell in &mut cells {
                    // pipe borders survive space splitting glued to cells
                    *cell = cell.trim_matches(|c: char| c == '|' || c == ' ').to_string();
                }
                cells.retain(|c| !c.is_empty());
                cells
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        rows_to_table(&rows, true).map(ChartData::Tabular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_separated_result() {
        let source = "name\tcount\nalice\t10\nbob\t7\n";
        let data = SqlFormat.parse(source).unwrap();
        let table = data.as_table().unwrap();
        assert_eq!(table.labels, vec!["alice", "bob"]);
        assert_eq!(table.datasets[0].label, "count");
        assert_eq!(table.datasets[0].data, vec![10.0, 7.0]);
    }

    #[test]
    fn test_space_aligned_result() {
        let source = "city        population\nOslo        700000\nBergen      290000\n";
        let data = SqlFormat.parse(source).unwrap();
        let table = data.as_table().unwrap();
        assert_eq!(table.labels, vec!["Oslo", "Bergen"]);
        assert_eq!(table.datasets[0].data, vec![700000.0, 290000.0]);
    }

    #[test]
    fn test_mysql_style_box_drawing() {
        let source = "\
+-------+-------+
| name  | total |
+-------+-------+
| a     | 1,500 |
| b     | 900   |
+-------+-------+
";
        let data = SqlFormat.parse(source).unwrap();
        let table = data.as_table().unwrap();
        assert_eq!(table.labels, vec!["a", "b"]);
        assert_eq!(table.datasets[0].label, "total");
        assert_eq!(table.datasets[0].data, vec![1500.0, 900.0]);
    }

    #[test]
    fn test_header_only_fails() {
        assert!(matches!(
            SqlFormat.parse("name\tcount\n"),
            Err(FormatError::FormatMismatch(_))
        ));
    }
}
