//! End-to-end tests: dataset file -> loader -> store -> app projections.

use chrono::NaiveDate;
use patch_notes::loader::{load_dataset, DatasetSource};
use patch_notes::model::StoreOptions;
use patch_notes::reports::summary_report;
use patch_notes::tui::App;
use std::io::Write;
use tempfile::NamedTempFile;

const DATASET: &str = r#"{
    "generated_at": "2026-02-20T12:00:00Z",
    "patches": [
        {
            "patch_id": "4.0.1",
            "version": "4.0.1",
            "release_date_iso": "2026-01-03",
            "status": "Archived",
            "categories": [
                {"name": "Fixes", "items": ["Crash fix"]}
            ]
        },
        {
            "patch_id": "4.0.2",
            "version": "4.0.2",
            "release_date_iso": "2026-02-14",
            "build_channel": "LIVE",
            "status": "Current",
            "categories": [
                {"name": "Features", "items": ["Jump drive"]}
            ]
        }
    ]
}"#;

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write dataset");
    file
}

fn options() -> StoreOptions {
    StoreOptions {
        window_months: 3,
        no_prune: false,
        today: NaiveDate::from_ymd_opt(2026, 2, 20).expect("valid date"),
    }
}

#[test]
fn loads_file_and_selects_newest() {
    let file = write_dataset(DATASET);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let store = load_dataset(&source, options()).expect("dataset loads");

    assert_eq!(store.len(), 2);
    assert_eq!(store.newest().version, "4.0.2");
    // Display dates come from the ISO field
    assert_eq!(store.newest().release_date, "Feb 14, 2026");

    let app = App::new(store);
    assert_eq!(app.current().version, "4.0.2");
    let panel = app.categories();
    assert_eq!(panel.categories[0].name, "Features");
    assert_eq!(panel.categories[0].items[0].text, "Jump drive");
}

#[test]
fn selecting_an_older_release_switches_the_panel() {
    let file = write_dataset(DATASET);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let store = load_dataset(&source, options()).expect("dataset loads");
    let mut app = App::new(store);

    let rows = app.history();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].version, "4.0.2");
    assert_eq!(rows[1].version, "4.0.1");
    assert!(rows[0].is_live);
    assert!(!rows[1].is_live);

    assert!(app.select_patch("4.0.1"));
    let panel = app.categories();
    assert_eq!(panel.categories[0].name, "Fixes");
    assert_eq!(panel.categories[0].items[0].text, "Crash fix");
}

#[test]
fn stats_are_inferred_from_category_names() {
    let file = write_dataset(DATASET);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let store = load_dataset(&source, options()).expect("dataset loads");

    let newest = store.newest();
    assert_eq!(newest.stats.features, 1);
    assert_eq!(newest.stats.fixes, 0);

    let older = store.get("4.0.1").expect("present");
    assert_eq!(older.stats.fixes, 1);
    assert_eq!(older.change_count(), 1);
}

#[test]
fn old_dated_patches_are_pruned_unless_disabled() {
    let dataset = r#"{
        "patches": [
            {"version": "4.0.2", "release_date_iso": "2026-02-14",
             "categories": [{"name": "Fixes", "items": ["x"]}]},
            {"version": "3.18.0", "release_date_iso": "2025-09-01",
             "categories": [{"name": "Fixes", "items": ["y"]}]}
        ]
    }"#;
    let file = write_dataset(dataset);
    let source = DatasetSource::Path(file.path().to_path_buf());

    let store = load_dataset(&source, options()).expect("dataset loads");
    assert_eq!(store.len(), 1);
    assert!(store.find_by_version("3.18.0").is_none());

    let mut opts = options();
    opts.no_prune = true;
    let store = load_dataset(&source, opts).expect("dataset loads");
    assert_eq!(store.len(), 2);
}

#[test]
fn records_without_ids_get_positional_fallbacks() {
    let dataset = r#"{
        "patches": [
            {"categories": [{"name": "Fixes", "items": ["a"]}]},
            {"categories": [{"name": "Fixes", "items": ["b"]}]}
        ]
    }"#;
    let file = write_dataset(dataset);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let store = load_dataset(&source, options()).expect("dataset loads");

    assert_eq!(store.len(), 2);
    assert!(store.get("patch-0").is_some());
    assert!(store.get("patch-1").is_some());
}

#[test]
fn dataset_failures_are_classified() {
    // Missing file
    let source = DatasetSource::Path("/no/such/file.json".into());
    let err = load_dataset(&source, options()).expect_err("missing file");
    assert!(err.is_dataset_failure());

    // Invalid JSON
    let file = write_dataset("{not json");
    let source = DatasetSource::Path(file.path().to_path_buf());
    let err = load_dataset(&source, options()).expect_err("invalid JSON");
    assert!(err.is_dataset_failure());

    // Empty patches array
    let file = write_dataset(r#"{"patches": []}"#);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let err = load_dataset(&source, options()).expect_err("empty dataset");
    assert!(err.is_dataset_failure());

    // Everything pruned away
    let file = write_dataset(
        r#"{"patches": [{"version": "1.0", "release_date_iso": "2020-01-01",
            "categories": [{"name": "Fixes", "items": ["x"]}]}]}"#,
    );
    let source = DatasetSource::Path(file.path().to_path_buf());
    let err = load_dataset(&source, options()).expect_err("pruned empty");
    assert!(err.is_dataset_failure());
}

#[test]
fn summary_report_covers_selection_and_history() {
    let file = write_dataset(DATASET);
    let source = DatasetSource::Path(file.path().to_path_buf());
    let store = load_dataset(&source, options()).expect("dataset loads");

    let text = summary_report(&store, store.newest());
    assert!(text.contains("Patch 4.0.2"));
    assert!(text.contains("Jump drive"));
    // History lists every retained release
    assert!(text.contains("4.0.1"));
}
