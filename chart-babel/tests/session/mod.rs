//! Session pipeline tests
//!
//! Ingest, snapshot, undo and export through a registry, the way a host
//! application drives the library.

use chart_babel::session::samples;
use chart_babel::{ChartData, FormatError, FormatId, FormatRegistry, Session};

#[test]
fn test_ingest_then_export() {
    let registry = FormatRegistry::with_defaults();
    let mut session = Session::new();

    session
        .ingest(&registry, "Month,Sales\nJan,100\nFeb,120\n", None)
        .unwrap();

    let exported = session.export(&registry, FormatId::Markdown).unwrap();
    assert!(exported.contains("| Jan | 100 |"));
    assert!(exported.contains("| --- | --- |"));
}

#[test]
fn test_hint_routes_ingestion() {
    let registry = FormatRegistry::with_defaults();
    let mut session = Session::new();

    // tab-free content with a TSV hint still goes to the TSV parser
    let data = session
        .ingest(&registry, "X\tA\na\t1\n", Some("text/tab-separated-values"))
        .unwrap();
    assert_eq!(data.as_table().unwrap().labels, vec!["a"]);
}

#[test]
fn test_export_without_data() {
    let registry = FormatRegistry::with_defaults();
    let session = Session::new();
    assert!(matches!(
        session.export(&registry, FormatId::Csv),
        Err(FormatError::NotSupported(_))
    ));
}

#[test]
fn test_failed_ingest_preserves_current_data() {
    let registry = FormatRegistry::with_defaults();
    let mut session = Session::new();

    session.set_data(samples::sales()).unwrap();
    assert!(session.ingest(&registry, "{broken", None).is_err());
    assert_eq!(session.current(), Some(&samples::sales()));
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_undo_across_ingests() {
    let registry = FormatRegistry::with_defaults();
    let mut session = Session::new();

    session.ingest(&registry, "X,A\na,1\n", None).unwrap();
    session.ingest(&registry, "X,A\nb,2\n", None).unwrap();

    let restored = session.undo().unwrap();
    assert_eq!(restored.as_table().unwrap().labels, vec!["a"]);
}

#[test]
fn test_samples_round_trip_through_json() {
    let registry = FormatRegistry::with_defaults();
    for name in samples::NAMES {
        let mut session = Session::new();
        session.set_data(samples::by_name(name).unwrap()).unwrap();
        let exported = session.export(&registry, FormatId::Json).unwrap();
        let reparsed = registry.parse(&exported, FormatId::Json).unwrap();
        assert_eq!(Some(&reparsed), session.current(), "{name}");
    }
}

#[test]
fn test_word_data_only_exports_as_json() {
    let registry = FormatRegistry::with_defaults();
    let mut session = Session::new();
    session.set_data(samples::word_frequencies()).unwrap();

    assert!(session.export(&registry, FormatId::Json).is_ok());
    assert!(matches!(
        session.export(&registry, FormatId::Csv),
        Err(FormatError::NotSupported(_))
    ));
    if let Some(ChartData::Words(list)) = session.current() {
        assert_eq!(list.words[0].text, "JavaScript");
    } else {
        panic!("expected word list");
    }
}
