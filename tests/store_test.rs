//! Tests for record stores

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use bstree::application::ApplicationError;
use bstree::domain::NewTreeRecord;
use bstree::infrastructure::store::{InMemoryStore, JsonFileStore};
use bstree::infrastructure::traits::{RealFileSystem, TreeStore};

fn file_store(dir: &TempDir) -> (JsonFileStore, PathBuf) {
    let path = dir.path().join("nested").join("trees.json");
    (JsonFileStore::new(Arc::new(RealFileSystem), path.clone()), path)
}

#[test]
fn given_missing_file_when_listing_then_empty() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (store, path) = file_store(&temp);

    // Act
    let records = store.list_recent().unwrap();

    // Assert
    assert!(records.is_empty());
    assert!(!path.exists());
}

#[test]
fn given_first_append_when_storing_then_creates_directory_and_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (store, path) = file_store(&temp);

    // Act
    let record = store
        .append(NewTreeRecord::new("[1, 2]", r#"{"value":1,"right":{"value":2}}"#))
        .unwrap();

    // Assert
    assert_eq!(record.id, 1);
    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"inputNumbers\": \"[1, 2]\""));
    assert!(content.contains("\"treeJson\""));
    assert!(content.contains("\"createdAt\""));
}

#[test]
fn given_records_when_reopening_store_then_records_persist() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trees.json");
    {
        let store = JsonFileStore::new(Arc::new(RealFileSystem), &path);
        store.append(NewTreeRecord::new("[1]", r#"{"value":1}"#)).unwrap();
        store.append(NewTreeRecord::new("[2]", r#"{"value":2}"#)).unwrap();
    }

    // Act
    let reopened = JsonFileStore::new(Arc::new(RealFileSystem), &path);
    let third = reopened
        .append(NewTreeRecord::new("[3]", r#"{"value":3}"#))
        .unwrap();
    let records = reopened.list_recent().unwrap();

    // Assert
    assert_eq!(third.id, 3);
    let inputs: Vec<&str> = records.iter().map(|r| r.input_numbers.as_str()).collect();
    assert_eq!(inputs, vec!["[3]", "[2]", "[1]"]);
}

#[test]
fn given_stored_record_when_getting_then_round_trips_fields() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (store, _path) = file_store(&temp);
    let stored = store
        .append(NewTreeRecord::new("[9]", r#"{"value":9}"#))
        .unwrap();

    // Act
    let found = store.get(stored.id).unwrap();
    let missing = store.get(stored.id + 1).unwrap();

    // Assert
    assert_eq!(found, Some(stored));
    assert_eq!(missing, None);
}

#[test]
fn given_corrupt_file_when_listing_then_operation_failed() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trees.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(Arc::new(RealFileSystem), &path);

    // Act
    let result = store.list_recent();

    // Assert
    match result {
        Err(ApplicationError::OperationFailed { context, .. }) => {
            assert!(context.starts_with("decode store"));
        }
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[test]
fn given_empty_file_when_listing_then_empty() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trees.json");
    std::fs::write(&path, "").unwrap();
    let store = JsonFileStore::new(Arc::new(RealFileSystem), &path);

    // Act / Assert
    assert!(store.list_recent().unwrap().is_empty());
}

#[test]
fn given_in_memory_store_when_appending_then_ids_increase() {
    // Arrange
    let store = InMemoryStore::new();

    // Act
    let a = store.append(NewTreeRecord::new("[1]", "{}")).unwrap();
    let b = store.append(NewTreeRecord::new("[2]", "{}")).unwrap();

    // Assert
    assert_eq!((a.id, b.id), (1, 2));
    assert!(b.created_at >= a.created_at);
    assert_eq!(store.len(), 2);
    assert_eq!(store.list_recent().unwrap()[0].id, 2);
}
