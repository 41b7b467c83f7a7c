//! Round-trip properties
//!
//! Exporting then re-parsing must reproduce the dataset exactly. Labels are
//! kept delimiter-free here; quoting behavior is covered by the CSV unit
//! tests.

use chart_babel::format::Format;
use chart_babel::formats::csv::CsvFormat;
use chart_babel::formats::json::JsonFormat;
use chart_babel::formats::tsv::TsvFormat;
use chart_babel::model::{ChartData, Dataset, Table};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,8}"
}

fn table() -> impl Strategy<Value = Table> {
    (1usize..6, 1usize..4)
        .prop_flat_map(|(rows, cols)| {
            (
                prop::collection::vec(label(), rows),
                prop::collection::vec(
                    (label(), prop::collection::vec(-100_000i32..100_000, rows)),
                    cols,
                ),
            )
        })
        .prop_map(|(labels, columns)| Table {
            labels,
            datasets: columns
                .into_iter()
                .map(|(label, data)| Dataset {
                    label,
                    data: data.into_iter().map(f64::from).collect(),
                })
                .collect(),
        })
}

proptest! {
    #[test]
    fn csv_round_trip(table in table()) {
        let data = ChartData::Tabular(table);
        let exported = CsvFormat.serialize(&data).unwrap();
        prop_assert_eq!(CsvFormat.parse(&exported).unwrap(), data);
    }

    #[test]
    fn tsv_round_trip(table in table()) {
        let data = ChartData::Tabular(table);
        let exported = TsvFormat.serialize(&data).unwrap();
        prop_assert_eq!(TsvFormat.parse(&exported).unwrap(), data);
    }

    #[test]
    fn json_round_trip(table in table()) {
        let data = ChartData::Tabular(table);
        let exported = JsonFormat.serialize(&data).unwrap();
        prop_assert_eq!(JsonFormat.parse(&exported).unwrap(), data);
    }
}

#[test]
fn test_fractional_values_survive() {
    let data = ChartData::Tabular(Table {
        labels: vec!["a".to_string(), "b".to_string()],
        datasets: vec![Dataset {
            label: "S".to_string(),
            data: vec![0.5, 1234.75],
        }],
    });
    let exported = CsvFormat.serialize(&data).unwrap();
    assert_eq!(CsvFormat.parse(&exported).unwrap(), data);
}
