//! Shared tabular plumbing
//!
//! All of the column-oriented parsers (CSV, TSV, TXT, Markdown, HTML, SQL and
//! the external spreadsheet path) funnel through the same normalization
//! routine: first row is the header, column 0 becomes the labels, every later
//! column becomes one dataset named by its header. The helpers here own the
//! two policies that keep those parsers lenient:
//!
//! - numeric cells are coerced, never fatal: a malformed cell becomes `0`
//! - short rows are padded with `0` so every dataset aligns with the labels

use crate::error::FormatError;
use crate::model::{Dataset, Table};

/// Parse a numeric cell the way `parseFloat` does: longest leading numeric
/// prefix, surrounding whitespace ignored, anything unparseable is `0`.
pub fn parse_number(cell: &str) -> f64 {
    let s = cell.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    // optional sign
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return 0.0;
    }
    // optional exponent, only kept if complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Parse a numeric cell after stripping thousands separators, currency
/// symbols and percent signs. Used by the display-oriented formats
/// (Markdown, HTML, SQL result tables) where `1,500` or `$42` or `85%`
/// are common.
pub fn parse_formatted_number(cell: &str) -> f64 {
    let stripped: String = cell.chars().filter(|c| !matches!(c, ',' | '$' | '%')).collect();
    parse_number(&stripped)
}

/// Normalize header + data rows into a [`Table`].
///
/// `rows[0]` is the header: column 0 names the category axis (the header
/// text itself is discarded), columns 1..N name one dataset each. Blank
/// headers fall back to `Column N`. Data rows shorter than the header are
/// padded with `0`; rows longer than the header have their extra cells
/// dropped.
///
/// `loose` selects [`parse_formatted_number`] over [`parse_number`] for the
/// numeric cells.
pub fn rows_to_table(rows: &[Vec<String>], loose: bool) -> Result<Table, FormatError> {
    if rows.len() < 2 {
        return Err(FormatError::FormatMismatch(
            "input must have at least a header row and one data row".to_string(),
        ));
    }

    let headers = &rows[0];
    let mut labels = Vec::new();
    let mut datasets: Vec<Dataset> = headers
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, h)| Dataset {
            label: if h.trim().is_empty() {
                format!("Column {i}")
            } else {
                h.trim().to_string()
            },
            data: Vec::new(),
        })
        .collect();

    for row in &rows[1..] {
        if row.is_empty() {
            continue;
        }
        labels.push(row[0].trim().to_string());
        for (j, dataset) in datasets.iter_mut().enumerate() {
            let value = match row.get(j + 1) {
                Some(cell) if loose => parse_formatted_number(cell),
                Some(cell) => parse_number(cell),
                None => 0.0,
            };
            dataset.data.push(value);
        }
    }

    Ok(Table { labels, datasets })
}

/// Normalize an array-of-arrays into canonical tabular data.
///
/// This is the entry point for binary spreadsheet input: decoding `.xlsx` /
/// `.xls` bytes is delegated to an external codec, which hands the resulting
/// rows of cell strings to this routine. It applies the exact row/column
/// conventions the CSV parser uses.
pub fn from_rows(rows: &[Vec<String>]) -> Result<crate::model::ChartData, FormatError> {
    rows_to_table(rows, false).map(crate::model::ChartData::Tabular)
}

/// Borrow the tabular payload or fail: only tabular data has textual
/// exporters.
pub(crate) fn require_table<'a>(
    data: &'a crate::model::ChartData,
    format: &str,
) -> Result<&'a Table, FormatError> {
    data.as_table().ok_or_else(|| {
        FormatError::NotSupported(format!(
            "only tabular data can be serialized to {format}"
        ))
    })
}

/// Render one numeric cell. Integral values print without a decimal point
/// (`30`, not `30.0`), which keeps exports byte-stable under re-parsing.
pub(crate) fn format_cell(value: f64) -> String {
    value.to_string()
}

/// Serialize a table with a single-character delimiter (CSV and TSV share
/// this). The label column is headed `Category`; unnamed datasets fall back
/// to `Data`. Values missing past the end of a series render as empty cells.
pub(crate) fn serialize_delimited(table: &Table, sep: char) -> String {
    let mut out = String::new();
    out.push_str("Category");
    for dataset in &table.datasets {
        out.push(sep);
        out.push_str(if dataset.label.is_empty() {
            "Data"
        } else {
            &dataset.label
        });
    }
    out.push('\n');

    for (i, label) in table.labels.iter().enumerate() {
        out.push_str(label);
        for dataset in &table.datasets {
            out.push(sep);
            if let Some(value) = dataset.data.get(i) {
                out.push_str(&format_cell(*value));
            }
        }
        out.push('\n');
    }
    out
}

/// True if the line is a box-drawing separator such as `+----+----+`.
pub fn is_box_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| matches!(c, '+' | '-' | '|'))
}

/// True if the line is a Markdown table separator row such as `| --- | :-: |`.
pub fn is_markdown_separator(line: &str) -> bool {
    let inner: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|')
        .collect();
    !inner.is_empty() && inner.contains('-') && inner.chars().all(|c| matches!(c, '-' | ':'))
}
