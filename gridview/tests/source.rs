use std::path::PathBuf;

use gridview::store::Column;
use gridview::{FileSource, GridController, HttpSource, LoadError, RowSource};

fn temp_json(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gridview-test-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[tokio::test]
async fn test_file_source_decodes_rows() {
    let path = temp_json(
        "ok.json",
        r#"[
            {"id": 1, "firstName": "Ann", "address": {"city": "Riga"}},
            {"id": 2, "firstName": "Bob"}
        ]"#,
    );

    let rows = FileSource::new(&path).fetch().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].display_text("firstName"), "Ann");
    assert_eq!(rows[0].display_text_at("address.city"), "Riga");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_file_source_missing_file_is_io_error() {
    let result = FileSource::new("/nonexistent/gridview-rows.json").fetch().await;
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[tokio::test]
async fn test_file_source_bad_payload_is_decode_error() {
    let path = temp_json("bad.json", r#"{"not": "an array"}"#);
    let result = FileSource::new(&path).fetch().await;
    assert!(matches!(result, Err(LoadError::Decode(_))));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_http_source_rejects_invalid_url() {
    let result = HttpSource::new("not a url");
    assert!(matches!(result, Err(LoadError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_controller_load_installs_rows() {
    let path = temp_json("load.json", r#"[{"name": "Ann"}, {"name": "Bob"}]"#);

    let mut grid = GridController::new(vec![Column::new("name")]);
    let count = grid.load(&FileSource::new(&path)).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(grid.store().len(), 2);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn test_failed_load_keeps_pre_load_state() {
    let mut grid = GridController::new(vec![Column::new("name")]);
    let result = grid.load(&FileSource::new("/nonexistent/rows.json")).await;

    assert!(result.is_err());
    assert!(grid.store().is_empty());
    assert_eq!(grid.visible_count(), 0);
}
