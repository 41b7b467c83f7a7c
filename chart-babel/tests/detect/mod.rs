//! End-to-end detection tests
//!
//! Unknown text goes in, the right parser runs, canonical data comes out.

use chart_babel::detect::parse_clipboard;
use chart_babel::{ChartData, FormatError, FormatRegistry};

fn registry() -> FormatRegistry {
    FormatRegistry::with_defaults()
}

#[test]
fn test_pasted_csv() {
    let data = parse_clipboard(&registry(), "Month,Sales\nJan,100\nFeb,120\n").unwrap();
    let table = data.as_table().unwrap();
    assert_eq!(table.labels, vec!["Jan", "Feb"]);
    assert_eq!(table.datasets[0].label, "Sales");
}

#[test]
fn test_pasted_spreadsheet_cells() {
    // copying cells out of a spreadsheet yields tab-separated text
    let data = parse_clipboard(&registry(), "X\tA\tB\na\t1\t2\nb\t3\t4\n").unwrap();
    let table = data.as_table().unwrap();
    assert_eq!(table.datasets.len(), 2);
    assert_eq!(table.datasets[1].data, vec![2.0, 4.0]);
}

#[test]
fn test_pasted_markdown_table() {
    let text = "| Region | Revenue |\n| --- | --- |\n| North | $1,500 |\n";
    let data = parse_clipboard(&registry(), text).unwrap();
    let table = data.as_table().unwrap();
    assert_eq!(table.labels, vec!["North"]);
    assert_eq!(table.datasets[0].data, vec![1500.0]);
}

#[test]
fn test_pasted_html_fragment() {
    let text = "<table><tr><th>X</th><th>A</th></tr><tr><td>a</td><td>7</td></tr></table>";
    let data = parse_clipboard(&registry(), text).unwrap();
    assert_eq!(data.as_table().unwrap().datasets[0].data, vec![7.0]);
}

#[test]
fn test_pasted_json_hierarchy() {
    let text = r#"{"name": "root", "value": 10, "children": [{"name": "leaf", "value": 4}]}"#;
    let data = parse_clipboard(&registry(), text).unwrap();
    assert!(matches!(data, ChartData::Hierarchy(_)));
}

#[test]
fn test_json_wins_even_when_commas_dominate() {
    // plenty of commas, but the leading brace routes to JSON
    let text = r#"{"labels": ["a", "b"], "datasets": [{"label": "S", "data": [1, 2]}]}"#;
    let data = parse_clipboard(&registry(), text).unwrap();
    assert_eq!(data.as_table().unwrap().labels, vec!["a", "b"]);
}

#[test]
fn test_malformed_json_does_not_fall_through() {
    // once sniffed as JSON it fails as JSON rather than retrying as CSV
    let result = parse_clipboard(&registry(), "{not json, but: has, commas}");
    assert!(matches!(result, Err(FormatError::FormatMismatch(_))));
}

#[test]
fn test_single_line_is_rejected_by_the_parser() {
    let result = parse_clipboard(&registry(), "just one line");
    assert!(matches!(result, Err(FormatError::FormatMismatch(_))));
}
