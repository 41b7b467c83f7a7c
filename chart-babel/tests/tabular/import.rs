use chart_babel::format::Format;
use chart_babel::formats::csv::CsvFormat;
use chart_babel::formats::html::HtmlFormat;
use chart_babel::formats::markdown::MarkdownFormat;
use chart_babel::formats::tsv::TsvFormat;
use chart_babel::{ChartData, FormatId, FormatRegistry};

/// The same table expressed in four syntaxes must normalize identically.
#[test]
fn test_cross_format_equivalence() {
    let csv = "Category,Q1,Q2\nWidgets,120,150\nGears,90,95\n";
    let tsv = "Category\tQ1\tQ2\nWidgets\t120\t150\nGears\t90\t95\n";
    let md = "| Category | Q1 | Q2 |\n| --- | --- | --- |\n| Widgets | 120 | 150 |\n| Gears | 90 | 95 |\n";
    let html = "<table>\
        <tr><th>Category</th><th>Q1</th><th>Q2</th></tr>\
        <tr><td>Widgets</td><td>120</td><td>150</td></tr>\
        <tr><td>Gears</td><td>90</td><td>95</td></tr>\
        </table>";

    let from_csv = CsvFormat.parse(csv).unwrap();
    let from_tsv = TsvFormat.parse(tsv).unwrap();
    let from_md = MarkdownFormat.parse(md).unwrap();
    let from_html = HtmlFormat.parse(html).unwrap();

    assert_eq!(from_csv, from_tsv);
    assert_eq!(from_csv, from_md);
    assert_eq!(from_csv, from_html);
}

#[test]
fn test_registry_dispatch_matches_direct_parse() {
    let registry = FormatRegistry::with_defaults();
    let csv = "X,A\na,1\nb,2\n";
    let via_registry = registry.parse(csv, FormatId::Csv).unwrap();
    let direct = CsvFormat.parse(csv).unwrap();
    assert_eq!(via_registry, direct);
}

#[test]
fn test_ragged_input_is_padded_everywhere() {
    let registry = FormatRegistry::with_defaults();
    let csv = "X,A,B\na,1,2\nb,3\n";
    let data = registry.parse(csv, FormatId::Csv).unwrap();
    let table = data.as_table().unwrap();
    assert_eq!(table.datasets[0].data, vec![1.0, 3.0]);
    assert_eq!(table.datasets[1].data, vec![2.0, 0.0]);
}

#[test]
fn test_spreadsheet_grid_entry_point() {
    // decoded spreadsheet cells skip detection and normalize directly
    let rows = vec![
        vec!["Month".to_string(), "Sales".to_string()],
        vec!["Jan".to_string(), "100".to_string()],
        vec!["Feb".to_string(), "120.5".to_string()],
    ];
    let data = chart_babel::common::from_rows(&rows).unwrap();
    match data {
        ChartData::Tabular(table) => {
            assert_eq!(table.labels, vec!["Jan", "Feb"]);
            assert_eq!(table.datasets[0].data, vec![100.0, 120.5]);
        }
        other => panic!("expected tabular data, got {:?}", other.kind()),
    }
}
