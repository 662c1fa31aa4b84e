//! End-to-end tests for the build workflow.

use crate::common::BUILD_FIXTURES_DIR;
use folio::build::{run_build, INDEX_FILENAME};
use folio::BuildError;
use folio::{match_query, SearchIndex};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_build_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/portfolio", BUILD_FIXTURES_DIR);

    let result = run_build(&input_path, output_path.to_str().unwrap(), 10);
    assert!(result.is_ok(), "Build should succeed: {:?}", result.err());

    let hashed = result.unwrap();
    let name = hashed.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("search-") && name.ends_with(".json"), "{}", name);
    assert!(output_path.join(INDEX_FILENAME).exists());

    // Both copies hold identical bytes
    let stable = fs::read(output_path.join(INDEX_FILENAME)).unwrap();
    assert_eq!(fs::read(&hashed).unwrap(), stable);
    assert_eq!(name, format!("search-{:08x}.json", crc32fast::hash(&stable)));
}

#[test]
fn test_built_index_answers_queries() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let input_path = format!("{}/portfolio", BUILD_FIXTURES_DIR);
    run_build(&input_path, output_path.to_str().unwrap(), 10).unwrap();

    let json = fs::read_to_string(output_path.join(INDEX_FILENAME)).unwrap();
    let index = SearchIndex::from_json(&json).unwrap();
    assert_eq!(index.sites().len(), 4);

    let tutor = match_query(&index, "tut", 5);
    assert_eq!(tutor[0].path, "/work/tutoring");

    let github = match_query(&index, "github", 5);
    assert_eq!(github.len(), 1);
    assert!(github[0].is_external());

    let resume = match_query(&index, "resume", 5);
    assert_eq!(resume[0].title, "GitHub");
}

#[test]
fn test_run_build_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");

    let result = run_build(temp_dir.path().to_str().unwrap(), output_path.to_str().unwrap(), 10);
    assert!(matches!(result, Err(BuildError::Read { .. })));
    assert!(!output_path.exists(), "Nothing should be written on failure");
}

#[test]
fn test_run_build_bad_document() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output");
    let input_path = format!("{}/broken", BUILD_FIXTURES_DIR);

    let result = run_build(&input_path, output_path.to_str().unwrap(), 10);
    match result {
        Err(BuildError::Parse { path, .. }) => assert!(path.ends_with("bad.json")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_run_build_empty_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "documents": []}"#,
    )
    .unwrap();
    let output_path = temp_dir.path().join("output");

    run_build(temp_dir.path().to_str().unwrap(), output_path.to_str().unwrap(), 10).unwrap();

    let json = fs::read_to_string(output_path.join(INDEX_FILENAME)).unwrap();
    let index = SearchIndex::from_json(&json).unwrap();
    assert!(index.sites().is_empty());
    assert!(match_query(&index, "anything", 5).is_empty());
}

#[test]
fn test_rebuild_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = format!("{}/portfolio", BUILD_FIXTURES_DIR);
    let a = temp_dir.path().join("a");
    let b = temp_dir.path().join("b");
    let hashed_a = run_build(&input_path, a.to_str().unwrap(), 10).unwrap();
    let hashed_b = run_build(&input_path, b.to_str().unwrap(), 10).unwrap();

    assert_eq!(hashed_a.file_name(), hashed_b.file_name());
    assert_eq!(
        fs::read(a.join(INDEX_FILENAME)).unwrap(),
        fs::read(b.join(INDEX_FILENAME)).unwrap()
    );
}
