//! Export surface tests
//!
//! Snapshot the textual exporters and pin down which shapes each format
//! refuses.

use chart_babel::model::{Dataset, Table, TreeNode};
use chart_babel::{ChartData, FormatError, FormatId, FormatRegistry};
use insta::assert_snapshot;

fn sample() -> ChartData {
    ChartData::Tabular(Table {
        labels: ["A", "B", "C"].map(String::from).to_vec(),
        datasets: vec![
            Dataset {
                label: "Series 1".to_string(),
                data: vec![30.0, 50.5, 40.0],
            },
            Dataset {
                label: "Series 2".to_string(),
                data: vec![45.0, 35.0, 60.0],
            },
        ],
    })
}

#[test]
fn test_csv_export() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&sample(), FormatId::Csv).unwrap();
    assert_snapshot!(out, @r###"
    Category,Series 1,Series 2
    A,30,45
    B,50.5,35
    C,40,60
    "###);
}

#[test]
fn test_tsv_export() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&sample(), FormatId::Tsv).unwrap();
    assert_snapshot!(out, @r###"
    Category	Series 1	Series 2
    A	30	45
    B	50.5	35
    C	40	60
    "###);
}

#[test]
fn test_markdown_export() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&sample(), FormatId::Markdown).unwrap();
    assert_snapshot!(out, @r###"
    | Category | Series 1 | Series 2 |
    | --- | --- | --- |
    | A | 30 | 45 |
    | B | 50.5 | 35 |
    | C | 40 | 60 |
    "###);
}

#[test]
fn test_json_export() {
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&sample(), FormatId::Json).unwrap();
    assert_snapshot!(out, @r###"
    {
      "labels": [
        "A",
        "B",
        "C"
      ],
      "datasets": [
        {
          "label": "Series 1",
          "data": [
            30.0,
            50.5,
            40.0
          ]
        },
        {
          "label": "Series 2",
          "data": [
            45.0,
            35.0,
            60.0
          ]
        }
      ]
    }
    "###);
}

#[test]
fn test_short_series_exports_empty_cells() {
    let data = ChartData::Tabular(Table {
        labels: ["a", "b"].map(String::from).to_vec(),
        datasets: vec![Dataset {
            label: "S".to_string(),
            data: vec![1.0],
        }],
    });
    let registry = FormatRegistry::with_defaults();
    let out = registry.serialize(&data, FormatId::Csv).unwrap();
    assert_snapshot!(out, @r###"
    Category,S
    a,1
    b,
    "###);
}

#[test]
fn test_non_tabular_refused_by_text_exporters() {
    let tree = ChartData::Hierarchy(TreeNode {
        name: "root".to_string(),
        value: 1.0,
        children: vec![],
    });
    let registry = FormatRegistry::with_defaults();
    for id in [FormatId::Csv, FormatId::Tsv, FormatId::Markdown] {
        assert!(
            matches!(
                registry.serialize(&tree, id),
                Err(FormatError::NotSupported(_))
            ),
            "{id}"
        );
    }
    // JSON carries every shape
    assert!(registry.serialize(&tree, FormatId::Json).is_ok());
}

#[test]
fn test_parse_only_formats_refuse_serialization() {
    let registry = FormatRegistry::with_defaults();
    for id in [
        FormatId::Xml,
        FormatId::Yaml,
        FormatId::Html,
        FormatId::Sql,
        FormatId::Txt,
    ] {
        assert!(
            matches!(
                registry.serialize(&sample(), id),
                Err(FormatError::NotSupported(_))
            ),
            "{id}"
        );
    }
}
